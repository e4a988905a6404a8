//! KeyEntry entity - a single declared key

use serde::Serialize;

/// One key declaration read from the watched document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct KeyEntry {
    key: String,
    value: String,
}

impl KeyEntry {
    /// Create a new entry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The declared name
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw declared value (empty when the document omits it)
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for KeyEntry {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
