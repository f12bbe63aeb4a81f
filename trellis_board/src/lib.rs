// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_board --heading-base-level=0

//! Trellis Board: board/item collection primitives for drag-and-drop surfaces.
//!
//! This crate focuses on the _bookkeeping_ of a kanban-style board surface: an
//! ordered sequence of boards, each owning an ordered sequence of items, plus
//! the reorder/transfer engine that keeps both in a consistent arrangement as
//! drag gestures come in. It does **not** know anything about rendering,
//! gesture recognition, or drag previews; callers decide how to map pointer or
//! keyboard input into concrete `(active, over)` id pairs.
//!
//! The core type is [`BoardStore`], a small container that tracks:
//! - The ordered sequence of [`Board`]s, each owning its [`Item`]s exclusively.
//! - Typed ids ([`BoardId`], [`ItemId`], and the kind-tagged [`DragId`]) that
//!   make the gesture dispatch an exhaustive match rather than a string test.
//! - A monotonically increasing **revision** counter that bumps when the
//!   surface changes.
//!
//! The container is intentionally opinionated and compact:
//! - Boards and items live in plain `Vec`s; order is on-screen order.
//! - Ids are allocated by the store from a single counter, so every handle is
//!   unique across the whole surface and resolves to at most one entity.
//! - Every operation that could fail to resolve degrades to a no-op `None`;
//!   nothing in the public API panics.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_board::{BoardStore, DragEffect};
//!
//! let mut store = BoardStore::new();
//! let todo = store.add_board("Todo").unwrap();
//! let doing = store.add_board("Doing").unwrap();
//! let write = store.add_item(todo, "Write the report").unwrap();
//! store.add_item(doing, "Review the queue").unwrap();
//!
//! // Drag the item onto the other board: it is appended there.
//! let effect = store.apply_drag_move(write.into(), doing.into());
//! assert!(matches!(effect, Some(DragEffect::ItemTransferred { .. })));
//! assert_eq!(store.board(todo).unwrap().len(), 0);
//! assert_eq!(store.board(doing).unwrap().len(), 2);
//!
//! // Degenerate gestures leave the store untouched and report `None`.
//! assert!(store.apply_drag_move(write.into(), write.into()).is_none());
//! ```
//!
//! ## Concepts
//!
//! [`BoardStore`] is the single source of truth for the surface. All mutation
//! flows through it, under a single-writer discipline:
//!
//! - **Creation**: [`BoardStore::add_board`] and [`BoardStore::add_item`]
//!   append to the relevant sequence and hand back a fresh id. Empty titles
//!   are declined silently, matching the frictionless-forms behavior of the
//!   surfaces this crate backs.
//! - **Lookup**: ids resolve back to their entities ([`BoardStore::board`],
//!   [`BoardStore::item`], [`BoardStore::owner_of`]) or positions
//!   ([`BoardStore::board_index`], [`BoardStore::item_index`]). Stale ids
//!   resolve to `None`; they never fault.
//! - **Reorder/transfer**: [`BoardStore::apply_drag_move`] takes the pair of
//!   kind-tagged ids a gesture source reports and applies the one structural
//!   change it implies, reporting it as a [`DragEffect`] — or `None` when the
//!   combination has no defined move.
//!
//! Two invariants hold after every operation: each board id appears exactly
//! once in the top-level sequence, and each item id appears in exactly one
//! board's item sequence. [`BoardStore::is_consistent`] checks both.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod id;
mod reorder;
mod store;

pub use id::{BoardId, DragId, ItemId};
pub use reorder::DragEffect;
pub use store::{Board, BoardStore, Item};
