// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collection store: boards, their items, and the lookup service.

use alloc::string::String;
use alloc::vec::Vec;

use crate::id::{BoardId, DragId, ItemId};

/// A named unit owned by exactly one [`Board`] at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub(crate) id: ItemId,
    pub(crate) title: String,
}

impl Item {
    /// Returns this item's id.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Returns this item's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A named, ordered collection of [`Item`]s.
///
/// A board owns its items exclusively; cross-board transfers move the item in
/// one step, so an item is never shared and never orphaned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) id: BoardId,
    pub(crate) title: String,
    pub(crate) items: Vec<Item>,
}

impl Board {
    /// Returns this board's id.
    #[must_use]
    pub fn id(&self) -> BoardId {
        self.id
    }

    /// Returns this board's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns this board's items in top-to-bottom order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items on this board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this board has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The single source of truth for a board surface.
///
/// Boards are kept in on-screen (left-to-right) order; each board keeps its
/// items in on-screen (top-to-bottom) order. All mutation flows through this
/// type, and each mutation that changes the surface bumps [`Self::revision`].
///
/// Lookups take ids rather than positions and return `None` for stale ids;
/// see the crate docs for the invariants this container maintains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardStore {
    pub(crate) boards: Vec<Board>,
    next_token: u64,
    revision: u64,
}

impl BoardStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boards: Vec::new(),
            next_token: 0,
            revision: 0,
        }
    }

    /// Returns all boards in on-screen order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns an iterator over the boards in on-screen order.
    pub fn iter(&self) -> core::slice::Iter<'_, Board> {
        self.boards.iter()
    }

    /// Returns the number of boards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Returns `true` if the store has no boards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Returns the total number of items across all boards.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.boards.iter().map(Board::len).sum()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is a monotonically increasing counter local to this store.
    /// It is bumped only when a mutation changes the surface: a board or item
    /// added or removed, or a drag move that actually rearranged something.
    /// Declined creations and no-op gestures leave it unchanged.
    ///
    /// This is useful for observers that want a cheap “did anything actually
    /// change?” marker without comparing the full contents.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a new, empty board and returns its id.
    ///
    /// Declines with `None` if `title` is empty; nothing is added and the
    /// revision is unchanged. Titles are taken verbatim, so a whitespace-only
    /// title counts as non-empty.
    pub fn add_board(&mut self, title: &str) -> Option<BoardId> {
        if title.is_empty() {
            return None;
        }

        let id = BoardId(self.mint_token());
        self.boards.push(Board {
            id,
            title: String::from(title),
            items: Vec::new(),
        });
        self.bump_revision();
        Some(id)
    }

    /// Appends a new item to the end of `board` and returns its id.
    ///
    /// Declines with `None` if `title` is empty or `board` does not resolve.
    pub fn add_item(&mut self, board: BoardId, title: &str) -> Option<ItemId> {
        if title.is_empty() {
            return None;
        }

        // Mint the token only once the destination is known to exist.
        let idx = self.board_index(board)?;
        let id = ItemId(self.mint_token());
        self.boards[idx].items.push(Item {
            id,
            title: String::from(title),
        });
        self.bump_revision();
        Some(id)
    }

    /// Removes the board with the given id, returning it together with any
    /// items it still owned.
    ///
    /// Returns `None` (and changes nothing) if the id does not resolve.
    pub fn remove_board(&mut self, id: BoardId) -> Option<Board> {
        let idx = self.board_index(id)?;
        let board = self.boards.remove(idx);
        self.bump_revision();
        Some(board)
    }

    /// Removes the item with the given id from whichever board owns it.
    ///
    /// Returns `None` (and changes nothing) if the id does not resolve.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let (board_idx, item_idx) = self.item_index(id)?;
        let item = self.boards[board_idx].items.remove(item_idx);
        self.bump_revision();
        Some(item)
    }

    /// Returns the board with the given id, if any.
    #[must_use]
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == id)
    }

    /// Returns the board that owns the given item, if any.
    #[must_use]
    pub fn owner_of(&self, id: ItemId) -> Option<&Board> {
        self.boards
            .iter()
            .find(|board| board.items.iter().any(|item| item.id == id))
    }

    /// Resolves a kind-tagged id to its board: the board itself for a board
    /// id, the owning board for an item id.
    #[must_use]
    pub fn board_of(&self, id: DragId) -> Option<&Board> {
        match id {
            DragId::Board(id) => self.board(id),
            DragId::Item(id) => self.owner_of(id),
        }
    }

    /// Returns the item with the given id, if any.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.boards
            .iter()
            .flat_map(|board| board.items.iter())
            .find(|item| item.id == id)
    }

    /// Returns the position of the given board in the top-level sequence.
    #[must_use]
    pub fn board_index(&self, id: BoardId) -> Option<usize> {
        self.boards.iter().position(|board| board.id == id)
    }

    /// Returns the `(board, item)` position of the given item.
    #[must_use]
    pub fn item_index(&self, id: ItemId) -> Option<(usize, usize)> {
        self.boards.iter().enumerate().find_map(|(b, board)| {
            board
                .items
                .iter()
                .position(|item| item.id == id)
                .map(|i| (b, i))
        })
    }

    /// Returns the title of the given item, if it resolves.
    #[must_use]
    pub fn item_title(&self, id: ItemId) -> Option<&str> {
        self.item(id).map(Item::title)
    }

    /// Returns the title of the given board, if it resolves.
    #[must_use]
    pub fn board_title(&self, id: BoardId) -> Option<&str> {
        self.board(id).map(Board::title)
    }

    /// Returns the items of the given board, if it resolves.
    #[must_use]
    pub fn board_items(&self, id: BoardId) -> Option<&[Item]> {
        self.board(id).map(Board::items)
    }

    /// Checks the partition invariants by quadratic scan: every board id
    /// appears once in the top-level sequence, and every item id appears in
    /// exactly one board's item sequence.
    ///
    /// Intended for tests and debug assertions; for large surfaces the hashed
    /// variant behind the `hashbrown` feature is linear.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        for (i, board) in self.boards.iter().enumerate() {
            if self.boards[i + 1..].iter().any(|other| other.id == board.id) {
                return false;
            }
        }

        let mut items = self.boards.iter().flat_map(|board| board.items.iter());
        while let Some(item) = items.next() {
            if items.clone().any(|other| other.id == item.id) {
                return false;
            }
        }
        true
    }

    /// Hash-based variant of [`Self::is_consistent`] for large surfaces.
    #[cfg(feature = "hashbrown")]
    #[must_use]
    pub fn is_consistent_hashed(&self) -> bool {
        use hashbrown::HashSet;

        let mut board_ids: HashSet<BoardId> = HashSet::with_capacity(self.boards.len());
        if !self.boards.iter().all(|board| board_ids.insert(board.id)) {
            return false;
        }

        let mut item_ids: HashSet<ItemId> = HashSet::with_capacity(self.item_count());
        self.boards
            .iter()
            .flat_map(|board| board.items.iter())
            .all(|item| item_ids.insert(item.id))
    }

    fn mint_token(&mut self) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        token
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a> IntoIterator for &'a BoardStore {
    type Item = &'a Board;
    type IntoIter = core::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = BoardStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.revision(), 0);
        assert!(store.is_consistent());
    }

    #[test]
    fn add_board_appends_in_order() {
        let mut store = BoardStore::new();
        let a = store.add_board("A").unwrap();
        let b = store.add_board("B").unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.boards()[0].id(), a);
        assert_eq!(store.boards()[1].id(), b);
        assert_eq!(store.board_index(b), Some(1));
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn add_board_declines_empty_title() {
        let mut store = BoardStore::new();
        assert_eq!(store.add_board(""), None);
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn add_item_appends_to_its_board() {
        let mut store = BoardStore::new();
        let a = store.add_board("A").unwrap();
        let x = store.add_item(a, "x").unwrap();
        let y = store.add_item(a, "y").unwrap();

        let board = store.board(a).unwrap();
        assert_eq!(board.items()[0].id(), x);
        assert_eq!(board.items()[1].id(), y);
        assert_eq!(store.item_index(y), Some((0, 1)));
        assert_eq!(store.owner_of(x).unwrap().id(), a);
    }

    #[test]
    fn add_item_declines_empty_title_and_stale_board() {
        let mut store = BoardStore::new();
        let a = store.add_board("A").unwrap();
        let rev = store.revision();

        assert_eq!(store.add_item(a, ""), None);

        let ghost = store.remove_board(a).unwrap().id();
        assert_eq!(store.add_item(ghost, "x"), None);
        // Only the removal itself changed the surface.
        assert_eq!(store.revision(), rev + 1);
    }

    #[test]
    fn whitespace_title_counts_as_non_empty() {
        let mut store = BoardStore::new();
        assert!(store.add_board(" ").is_some());
        assert_eq!(store.boards()[0].title(), " ");
    }

    #[test]
    fn remove_board_detaches_its_items() {
        let mut store = BoardStore::new();
        let a = store.add_board("A").unwrap();
        let b = store.add_board("B").unwrap();
        let x = store.add_item(a, "x").unwrap();

        let removed = store.remove_board(a).unwrap();
        assert_eq!(removed.title(), "A");
        assert_eq!(removed.len(), 1);
        assert_eq!(store.item(x), None);
        assert_eq!(store.board_index(b), Some(0));
        assert!(store.is_consistent());

        assert_eq!(store.remove_board(a), None);
    }

    #[test]
    fn remove_item_leaves_owner_in_place() {
        let mut store = BoardStore::new();
        let a = store.add_board("A").unwrap();
        let x = store.add_item(a, "x").unwrap();
        let y = store.add_item(a, "y").unwrap();

        let removed = store.remove_item(x).unwrap();
        assert_eq!(removed.title(), "x");
        assert_eq!(store.item_index(y), Some((0, 0)));
        assert_eq!(store.remove_item(x), None);
        assert!(store.is_consistent());
    }

    #[test]
    fn lookups_resolve_titles_and_items() {
        let mut store = BoardStore::new();
        let a = store.add_board("A").unwrap();
        let x = store.add_item(a, "x").unwrap();

        assert_eq!(store.board_title(a), Some("A"));
        assert_eq!(store.item_title(x), Some("x"));
        assert_eq!(store.board_items(a).unwrap().len(), 1);
        assert_eq!(store.board_of(DragId::Item(x)).unwrap().id(), a);
        assert_eq!(store.board_of(DragId::Board(a)).unwrap().id(), a);

        let ghost = store.remove_item(x).unwrap().id();
        assert_eq!(store.item_title(ghost), None);
        assert_eq!(store.board_of(DragId::Item(ghost)), None);
    }

    #[cfg(feature = "hashbrown")]
    #[test]
    fn hashed_consistency_matches_scan() {
        let mut store = BoardStore::new();
        for b in 0..8 {
            let id = store.add_board("board").unwrap();
            for _ in 0..b {
                store.add_item(id, "item").unwrap();
            }
        }
        assert_eq!(store.is_consistent(), store.is_consistent_hashed());
    }
}
