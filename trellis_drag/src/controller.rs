// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture-event controller: one owned store, one session, live reorder.

use trellis_board::{BoardId, BoardStore, DragEffect, DragId, Item, ItemId};

use crate::session::DragSession;

/// Binds a [`DragSession`] to an owned [`BoardStore`] and drives the store
/// from gesture events.
///
/// The controller implements "live reorder": every accepted move event is a
/// full mutation of the store, so the on-screen arrangement always reflects
/// the drag in progress and [`Self::drag_end`] has nothing left to commit.
///
/// Rendering hosts read [`Self::store`] for the surface snapshot and the
/// title/items resolvers for the floating drag preview; the resolvers return
/// empty sentinels rather than `Option` because a preview for a stale id
/// should render as blank, not branch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragController {
    store: BoardStore,
    session: DragSession<DragId>,
}

impl DragController {
    /// Creates a controller with an empty store and an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: BoardStore::new(),
            session: DragSession::new(),
        }
    }

    /// Creates a controller over an existing store.
    #[must_use]
    pub const fn with_store(store: BoardStore) -> Self {
        Self {
            store,
            session: DragSession::new(),
        }
    }

    /// Returns the current surface snapshot.
    #[must_use]
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Returns mutable access to the store, for host-driven edits outside the
    /// gesture contract (single-writer discipline: do this between drags).
    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    /// Consumes the controller, yielding the store.
    #[must_use]
    pub fn into_store(self) -> BoardStore {
        self.store
    }

    /// Returns the id being dragged, if a drag is in progress.
    #[must_use]
    pub fn active(&self) -> Option<DragId> {
        self.session.active().copied()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// A gesture began on the entity with the given id.
    pub fn drag_start(&mut self, active: DragId) {
        self.session.start(active);
    }

    /// The pointer moved during a drag; `over` is the entity now under it.
    ///
    /// Applies the implied reorder/transfer to the store and reports it, or
    /// returns `None` without touching the store when:
    /// - the session is idle (a stray move after an end),
    /// - `active` is not the id this session is dragging,
    /// - `over` is `None` (the pointer is over nothing droppable), or
    /// - the id pair has no defined move (see
    ///   [`BoardStore::apply_drag_move`]).
    pub fn drag_move(&mut self, active: DragId, over: Option<DragId>) -> Option<DragEffect> {
        if !self.session.matches(&active) {
            return None;
        }
        let over = over?;
        self.store.apply_drag_move(active, over)
    }

    /// The gesture ended; returns the id that was being dragged, if any.
    ///
    /// Always returns the session to idle. Moves already applied are final;
    /// there is no commit and no rollback.
    pub fn drag_end(&mut self) -> Option<DragId> {
        self.session.end()
    }

    /// Adds a board; see [`BoardStore::add_board`].
    pub fn add_board(&mut self, title: &str) -> Option<BoardId> {
        self.store.add_board(title)
    }

    /// Adds an item; see [`BoardStore::add_item`].
    pub fn add_item(&mut self, board: BoardId, title: &str) -> Option<ItemId> {
        self.store.add_item(board, title)
    }

    /// Returns the item's title, or `""` if the id does not resolve.
    #[must_use]
    pub fn item_title(&self, id: ItemId) -> &str {
        self.store.item_title(id).unwrap_or("")
    }

    /// Returns the board's title, or `""` if the id does not resolve.
    #[must_use]
    pub fn board_title(&self, id: BoardId) -> &str {
        self.store.board_title(id).unwrap_or("")
    }

    /// Returns the board's items, or an empty slice if the id does not
    /// resolve.
    #[must_use]
    pub fn board_items(&self, id: BoardId) -> &[Item] {
        self.store.board_items(id).unwrap_or(&[])
    }
}
