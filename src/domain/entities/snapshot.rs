//! KeySnapshot entity - the watched document's keys at one read
//!
//! Snapshots are immutable once taken. The monitor replaces its accepted
//! snapshot wholesale; it never edits one in place.

use std::sync::Arc;

use super::KeyEntry;

/// Ordered, immutable sequence of key entries
///
/// Cloning is cheap: entries are shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySnapshot {
    entries: Arc<[KeyEntry]>,
}

impl Default for KeySnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl KeySnapshot {
    /// Create a snapshot from entries in source order
    pub fn new(entries: Vec<KeyEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Snapshot of a document without declarations
    pub fn empty() -> Self {
        Self {
            entries: Arc::from(Vec::new()),
        }
    }

    /// Entries in source order
    pub fn entries(&self) -> &[KeyEntry] {
        &self.entries
    }

    /// Key names in source order (duplicates included)
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(KeyEntry::key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether any entry declares `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key() == key)
    }

    /// Value of the first entry declaring `key`
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key() == key)
            .map(KeyEntry::value)
    }
}

impl FromIterator<KeyEntry> for KeySnapshot {
    fn from_iter<I: IntoIterator<Item = KeyEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a KeySnapshot {
    type Item = &'a KeyEntry;
    type IntoIter = std::slice::Iter<'a, KeyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
