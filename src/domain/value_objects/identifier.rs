//! Identifier value object - a key rewritten into a safe field name

use std::fmt;

/// Field name derived from a declared key
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, and a leading digit
/// gets a `_` prefix. Distinct keys may derive the same identifier; callers
/// do not deduplicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Derive an identifier from a raw key
    pub fn derive(key: &str) -> Self {
        let mut ident: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();

        if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert(0, '_');
        }

        Self(ident)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
