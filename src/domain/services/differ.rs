//! Differ Domain Service
//!
//! Computes which keys appeared or disappeared between two snapshots.
//! Only key presence counts; a changed value is not a difference.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::{KeyEntry, KeySnapshot};

/// Result of a diff operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    /// Entries of the current snapshot whose key is new
    pub added: Vec<KeyEntry>,
    /// Entries of the previous snapshot whose key is gone
    pub removed: Vec<KeyEntry>,
}

impl DiffResult {
    /// Whether there are any changes
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn added_keys(&self) -> Vec<String> {
        self.added.iter().map(|e| e.key().to_string()).collect()
    }

    pub fn removed_keys(&self) -> Vec<String> {
        self.removed.iter().map(|e| e.key().to_string()).collect()
    }

    /// Human-readable summary (e.g., "added: B, C; removed: A")
    pub fn summary(&self) -> String {
        fn list(entries: &[KeyEntry]) -> String {
            if entries.is_empty() {
                "none".to_string()
            } else {
                entries
                    .iter()
                    .map(KeyEntry::key)
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        format!("added: {}; removed: {}", list(&self.added), list(&self.removed))
    }
}

/// Differ service for comparing snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    /// Create a new Differ instance
    pub fn new() -> Self {
        Self
    }

    /// Compare the accepted snapshot with a freshly parsed one
    pub fn diff(&self, previous: &KeySnapshot, current: &KeySnapshot) -> DiffResult {
        let previous_keys: HashSet<&str> = previous.keys().collect();
        let current_keys: HashSet<&str> = current.keys().collect();

        let added = current
            .entries()
            .iter()
            .filter(|e| !previous_keys.contains(e.key()))
            .cloned()
            .collect();

        let removed = previous
            .entries()
            .iter()
            .filter(|e| !current_keys.contains(e.key()))
            .cloned()
            .collect();

        DiffResult { added, removed }
    }
}
