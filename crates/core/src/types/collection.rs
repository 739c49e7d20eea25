//! The accumulated reading list

use crate::types::{BookRecord, Isbn};
use std::collections::HashMap;

/// Insertion-ordered mapping from ISBN to book record
///
/// Adding is idempotent: a key that is already present is never overwritten.
/// Every key equals the `isbn` of the record stored under it, since records
/// are only ever keyed by their own ISBN.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookCollection {
    records: Vec<BookRecord>,
    index: HashMap<Isbn, usize>,
}

impl BookCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record unless its ISBN is already present
    ///
    /// Returns `true` when the record was added.
    pub fn insert_if_absent(&mut self, record: BookRecord) -> bool {
        if self.index.contains_key(record.isbn()) {
            return false;
        }

        self.index.insert(record.isbn().clone(), self.records.len());
        self.records.push(record);
        true
    }

    pub fn contains(&self, isbn: &Isbn) -> bool {
        self.index.contains_key(isbn)
    }

    pub fn get(&self, isbn: &Isbn) -> Option<&BookRecord> {
        self.index.get(isbn).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &BookRecord> {
        self.records.iter()
    }

    /// Returns a copy of the records in insertion order
    pub fn to_vec(&self) -> Vec<BookRecord> {
        self.records.clone()
    }

    /// Removes every record
    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }
}

impl<'a> IntoIterator for &'a BookCollection {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
