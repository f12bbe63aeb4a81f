// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_drag --heading-base-level=0

//! Trellis Drag: the drag session lifecycle over a board store.
//!
//! This crate provides two layers on top of `trellis_board`:
//!
//! - [`session::DragSession`]: a minimal `Idle`/`Dragging` state machine that
//!   tracks which key (if any) is currently being dragged. It is generic over
//!   the key type and applies nothing by itself.
//! - [`controller::DragController`]: binds a session to an owned
//!   [`BoardStore`](trellis_board::BoardStore) and implements the event
//!   contract a gesture source drives: start, move, end. Each move event is a
//!   full, live mutation of the store; ending a drag commits nothing further.
//!
//! The crate does not assume any particular UI framework, gesture recognizer,
//! or rendering stack. A host detects pointer or keyboard drags however it
//! likes, reports them as kind-tagged ids, and re-renders from the store
//! snapshot (using the store revision as a cheap change marker).
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_drag::controller::DragController;
//!
//! let mut controller = DragController::new();
//! let todo = controller.add_board("Todo").unwrap();
//! let done = controller.add_board("Done").unwrap();
//! let task = controller.add_item(todo, "Ship it").unwrap();
//!
//! // A gesture source reports: drag the task, hover over the other board.
//! controller.drag_start(task.into());
//! let effect = controller.drag_move(task.into(), Some(done.into()));
//! assert!(effect.is_some());
//! assert_eq!(controller.drag_end(), Some(task.into()));
//!
//! assert_eq!(controller.store().board(done).unwrap().len(), 1);
//! ```
//!
//! ## Event discipline
//!
//! Gesture sources in the wild occasionally misbehave: a move can arrive after
//! an end, or carry an active id from a stale gesture. The controller ignores
//! any move whose active id does not match the session, and any move while
//! idle, so stray events degrade to no-ops instead of corrupting the surface.
//! `drag_end` always succeeds and always returns the session to idle.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod session;
