//! # Library Store
//!
//! The in-memory book list. Newest records go to the front.
//!
//! `selection` is either a valid index into `items` or `None` when the
//! store is empty. List navigation clamps at the top and bottom rather
//! than wrapping.

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::core::action::Direction;

/// A stored book. Both fields are non-empty once it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    title: String,
    author: String,
}

impl BookRecord {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// True when neither field is blank.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("index {index} out of range for library of {len} books")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Default)]
pub struct LibraryStore {
    items: Vec<BookRecord>,
    selection: Option<usize>,
}

impl LibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, first record selected.
    pub fn with_records(records: Vec<BookRecord>) -> Self {
        let selection = (!records.is_empty()).then_some(0);
        Self {
            items: records,
            selection,
        }
    }

    pub fn items(&self) -> &[BookRecord] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookRecord> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&BookRecord> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected(&self) -> Option<&BookRecord> {
        self.selection.and_then(|i| self.get(i))
    }

    /// Prepend `record` and select it.
    pub fn insert_front(&mut self, record: BookRecord) {
        self.items.insert(0, record);
        self.selection = Some(0);
    }

    /// Remove the record at `index`, keeping the selection on the nearest
    /// remaining record.
    pub fn remove_at(&mut self, index: usize) -> Result<BookRecord, LibraryError> {
        if index >= self.items.len() {
            return Err(LibraryError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        self.selection = match (self.selection, self.items.len()) {
            (_, 0) => None,
            (Some(selected), len) => Some(selected.min(len - 1)),
            (None, _) => Some(0),
        };
        debug!(
            "Removed book at {} ({} left, selection {:?})",
            index,
            self.items.len(),
            self.selection
        );
        Ok(removed)
    }

    /// Move the selection one row, stopping at the first and last record.
    pub fn move_selection(&mut self, direction: Direction) {
        let Some(selected) = self.selection else {
            return;
        };
        let last = self.items.len() - 1;
        self.selection = Some(match direction {
            Direction::Next => (selected + 1).min(last),
            Direction::Previous => selected.saturating_sub(1),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_library;

    #[test]
    fn test_new_store_is_empty() {
        let store = LibraryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.selection(), None);
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_with_records_selects_first() {
        let store = sample_library();
        assert_eq!(store.len(), 3);
        assert_eq!(store.selection(), Some(0));
        assert_eq!(store.selected().map(BookRecord::title), Some("Dune"));
    }

    #[test]
    fn test_get_by_index() {
        let store = sample_library();
        assert_eq!(store.get(1).map(BookRecord::author), Some("Gibson"));
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_insert_front_is_most_recent_first() {
        let mut store = LibraryStore::new();
        store.insert_front(BookRecord::new("Dune", "Herbert"));
        store.insert_front(BookRecord::new("Emma", "Austen"));
        let titles: Vec<&str> = store.iter().map(BookRecord::title).collect();
        assert_eq!(titles, vec!["Emma", "Dune"]);
        assert_eq!(store.selection(), Some(0));
    }

    #[test]
    fn test_insert_front_resets_selection() {
        let mut store = sample_library();
        store.move_selection(Direction::Next);
        store.move_selection(Direction::Next);
        store.insert_front(BookRecord::new("Emma", "Austen"));
        assert_eq!(store.selection(), Some(0));
    }

    #[test]
    fn test_insert_then_remove_restores_items() {
        let mut store = sample_library();
        let before = store.items().to_vec();
        store.insert_front(BookRecord::new("Emma", "Austen"));
        let removed = store.remove_at(0).unwrap();
        assert_eq!(removed.title(), "Emma");
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = sample_library();
        assert_eq!(
            store.remove_at(3),
            Err(LibraryError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(store.len(), 3);

        let mut empty = LibraryStore::new();
        assert!(empty.remove_at(0).is_err());
    }

    #[test]
    fn test_remove_keeps_selection_when_still_valid() {
        let mut store = sample_library();
        store.move_selection(Direction::Next);
        store.remove_at(1).unwrap();
        assert_eq!(store.selection(), Some(1));
        assert_eq!(store.selected().map(BookRecord::title), Some("Emma"));
    }

    #[test]
    fn test_remove_last_clamps_selection() {
        let mut store = sample_library();
        store.move_selection(Direction::Next);
        store.move_selection(Direction::Next);
        store.remove_at(2).unwrap();
        assert_eq!(store.selection(), Some(1));
    }

    #[test]
    fn test_remove_only_item_empties_selection() {
        let mut store = LibraryStore::with_records(vec![BookRecord::new("Dune", "Herbert")]);
        store.remove_at(0).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.selection(), None);
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut store = sample_library();
        store.move_selection(Direction::Previous);
        assert_eq!(store.selection(), Some(0));
        for _ in 0..10 {
            store.move_selection(Direction::Next);
        }
        assert_eq!(store.selection(), Some(2));
    }

    #[test]
    fn test_move_selection_on_empty_is_noop() {
        let mut store = LibraryStore::new();
        store.move_selection(Direction::Next);
        store.move_selection(Direction::Previous);
        assert_eq!(store.selection(), None);
    }

    #[test]
    fn test_record_completeness() {
        assert!(BookRecord::new("Dune", "Herbert").is_complete());
        assert!(!BookRecord::new("Dune", " ").is_complete());
        assert!(!BookRecord::new("", "Herbert").is_complete());
    }
}
