//! Ordered, index-addressed record collections.
//!
//! Indices are 0-based here; the grammar converts the 1-based numbers users
//! type before they reach a collection.

use crate::error::{KeeperError, Result};
use crate::record::Record;

/// An ordered list of records. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding `records` in order.
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Appends a record and returns the new size.
    pub fn add(&mut self, record: R) -> usize {
        self.records.push(record);
        self.records.len()
    }

    /// Removes and returns the record at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<R> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&R> {
        self.check_index(index)?;
        Ok(&self.records[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut R> {
        self.check_index(index)?;
        Ok(&mut self.records[index])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only view of every record.
    pub fn all(&self) -> &[R] {
        &self.records
    }

    /// Fails with [`KeeperError::IndexOutOfRange`] unless `index < len`.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(KeeperError::IndexOutOfRange {
                noun: R::NOUN.to_owned(),
                index,
                size: self.records.len(),
            });
        }
        Ok(())
    }

    /// Case-insensitive substring search, keeping each match's 0-based index.
    pub fn find(&self, keyword: &str) -> Vec<(usize, &R)> {
        let needle = keyword.trim().to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches(&needle))
            .collect()
    }

    /// Numbered listing, 1-based, or [`Record::EMPTY_LISTING`].
    pub fn render(&self) -> String {
        if self.records.is_empty() {
            return R::EMPTY_LISTING.to_owned();
        }
        render_numbered(self.records.iter().enumerate())
    }
}

/// Renders `(index, record)` pairs as `N. record` lines, N being 1-based.
pub fn render_numbered<'a, R: Record + 'a>(
    entries: impl IntoIterator<Item = (usize, &'a R)>,
) -> String {
    entries
        .into_iter()
        .map(|(i, r)| format!("{}. {}", i + 1, r.render()))
        .collect::<Vec<_>>()
        .join("\n")
}
