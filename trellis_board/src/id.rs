// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed ids for boards and items, plus the kind-tagged drag currency.
//!
//! Ids are opaque handles minted by [`BoardStore`](crate::BoardStore) from a
//! single counter; boards and items never share a token. Hosts only ever
//! receive ids from the store and echo them back through the gesture contract,
//! so there is no public constructor. A handle can go stale when its entity is
//! removed; every consumer treats an unresolvable id as a no-op.

use core::fmt;

/// Identifies one board on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardId(pub(crate) u64);

/// Identifies one item, independent of which board currently owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub(crate) u64);

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board-{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// The kind-tagged id a gesture source reports for drag targets.
///
/// Carrying the kind as data makes the five-way dispatch in
/// [`BoardStore::apply_drag_move`](crate::BoardStore::apply_drag_move) an
/// exhaustive match over kind pairs; there is no "unknown kind" to defend
/// against, only stale handles, which resolve to `None` like any other miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragId {
    /// A board is under the pointer (or being dragged).
    Board(BoardId),
    /// An item is under the pointer (or being dragged).
    Item(ItemId),
}

impl DragId {
    /// Returns `true` if this id names a board.
    #[must_use]
    pub const fn is_board(self) -> bool {
        matches!(self, Self::Board(_))
    }

    /// Returns `true` if this id names an item.
    #[must_use]
    pub const fn is_item(self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Returns the board id, if this id names a board.
    #[must_use]
    pub const fn as_board(self) -> Option<BoardId> {
        match self {
            Self::Board(id) => Some(id),
            Self::Item(_) => None,
        }
    }

    /// Returns the item id, if this id names an item.
    #[must_use]
    pub const fn as_item(self) -> Option<ItemId> {
        match self {
            Self::Item(id) => Some(id),
            Self::Board(_) => None,
        }
    }
}

impl From<BoardId> for DragId {
    fn from(id: BoardId) -> Self {
        Self::Board(id)
    }
}

impl From<ItemId> for DragId {
    fn from(id: ItemId) -> Self {
        Self::Item(id)
    }
}

impl fmt::Display for DragId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(id) => id.fmt(f),
            Self::Item(id) => id.fmt(f),
        }
    }
}
