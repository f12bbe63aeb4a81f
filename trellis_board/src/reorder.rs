// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorder/transfer engine: one structural change per drag-move event.

use crate::id::{BoardId, DragId, ItemId};
use crate::store::BoardStore;

/// What a drag move structurally changed.
///
/// Returned by [`BoardStore::apply_drag_move`] so callers can tell "something
/// happened" from "nothing happened" without comparing stores, and can log or
/// animate the change without diffing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEffect {
    /// A board moved to a new slot in the top-level sequence.
    BoardMoved {
        /// The board that moved.
        board: BoardId,
        /// Its slot before the move.
        from: usize,
        /// Its slot after the move.
        to: usize,
    },
    /// An item moved to a new slot within its own board.
    ItemMoved {
        /// The board the item stayed on.
        board: BoardId,
        /// The item that moved.
        item: ItemId,
        /// Its slot before the move.
        from: usize,
        /// Its slot after the move.
        to: usize,
    },
    /// An item changed boards.
    ItemTransferred {
        /// The item that moved.
        item: ItemId,
        /// The board that gave the item up.
        from_board: BoardId,
        /// The item's slot on the source board before the move.
        from_index: usize,
        /// The board that received the item.
        to_board: BoardId,
        /// The item's slot on the destination board after the move.
        to_index: usize,
    },
}

impl BoardStore {
    /// Applies the one structural change implied by a drag-move event.
    ///
    /// `active` is the entity being dragged, `over` the entity currently under
    /// the pointer. The dispatch is an exhaustive match over the kind pair:
    ///
    /// - board over board: the active board moves to the target board's slot,
    ///   shifting the boards in between by one.
    /// - item over item on the same board: the active item moves to the target
    ///   item's slot, same shift semantics.
    /// - item over item on another board: the active item leaves its board and
    ///   is inserted immediately *before* the target item.
    /// - item over a board: the active item is appended to the end of that
    ///   board (dropping "on a board" has no natural index target). Over its
    ///   own board this is a move to the end.
    ///
    /// Everything else — identical ids, stale ids, a board over an item, a
    /// move that would reproduce the current arrangement — returns `None` and
    /// leaves the store untouched, including its revision. The operation never
    /// panics and never partially applies.
    ///
    /// ## Minimal example
    ///
    /// ```rust
    /// use trellis_board::{BoardStore, DragEffect};
    ///
    /// let mut store = BoardStore::new();
    /// let a = store.add_board("A").unwrap();
    /// let b = store.add_board("B").unwrap();
    /// let c = store.add_board("C").unwrap();
    ///
    /// // Drag B over C: B takes C's slot.
    /// let effect = store.apply_drag_move(b.into(), c.into());
    /// assert_eq!(effect, Some(DragEffect::BoardMoved { board: b, from: 1, to: 2 }));
    /// assert_eq!(store.board_index(c), Some(1));
    /// ```
    pub fn apply_drag_move(&mut self, active: DragId, over: DragId) -> Option<DragEffect> {
        if active == over {
            return None;
        }

        let effect = match (active, over) {
            (DragId::Board(active), DragId::Board(over)) => self.move_board(active, over),
            (DragId::Item(active), DragId::Item(over)) => self.move_item_over_item(active, over),
            (DragId::Item(active), DragId::Board(over)) => self.drop_item_on_board(active, over),
            // A board has no defined position within an item sequence.
            (DragId::Board(_), DragId::Item(_)) => None,
        };

        if effect.is_some() {
            self.bump_revision();
            debug_assert!(self.is_consistent(), "drag move broke the id partition");
        }
        effect
    }

    /// Board over board: move the active board to the target board's slot.
    fn move_board(&mut self, active: BoardId, over: BoardId) -> Option<DragEffect> {
        let from = self.board_index(active)?;
        let to = self.board_index(over)?;

        // Remove-then-insert with `to` measured before the removal: for a
        // forward move this lands the board in the target's old slot, not one
        // past it.
        let board = self.boards.remove(from);
        self.boards.insert(to, board);
        Some(DragEffect::BoardMoved {
            board: active,
            from,
            to,
        })
    }

    /// Item over item: reorder within a board, or transfer before the target.
    fn move_item_over_item(&mut self, active: ItemId, over: ItemId) -> Option<DragEffect> {
        let (active_board, from) = self.item_index(active)?;
        let (over_board, to) = self.item_index(over)?;

        if active_board == over_board {
            let items = &mut self.boards[active_board].items;
            let item = items.remove(from);
            items.insert(to, item);
            return Some(DragEffect::ItemMoved {
                board: self.boards[active_board].id(),
                item: active,
                from,
                to,
            });
        }

        // Distinct boards, so the removal does not disturb the target index;
        // inserting at `to` places the item immediately before the target.
        let item = self.boards[active_board].items.remove(from);
        self.boards[over_board].items.insert(to, item);
        Some(DragEffect::ItemTransferred {
            item: active,
            from_board: self.boards[active_board].id(),
            from_index: from,
            to_board: self.boards[over_board].id(),
            to_index: to,
        })
    }

    /// Item over a board: append to the end of that board.
    fn drop_item_on_board(&mut self, active: ItemId, over: BoardId) -> Option<DragEffect> {
        let (active_board, from) = self.item_index(active)?;
        let over_board = self.board_index(over)?;

        if active_board == over_board {
            let items = &mut self.boards[active_board].items;
            if from + 1 == items.len() {
                // Already last; nothing would change.
                return None;
            }
            let item = items.remove(from);
            items.push(item);
            return Some(DragEffect::ItemMoved {
                board: over,
                item: active,
                from,
                to: self.boards[active_board].len() - 1,
            });
        }

        let item = self.boards[active_board].items.remove(from);
        let to_index = self.boards[over_board].len();
        self.boards[over_board].items.push(item);
        Some(DragEffect::ItemTransferred {
            item: active,
            from_board: self.boards[active_board].id(),
            from_index: from,
            to_board: over,
            to_index,
        })
    }
}
