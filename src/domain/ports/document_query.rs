//! DocumentQuery port - structured lookup of declaration elements
//!
//! The extractor asks for "the declarations inside the first container" and
//! does not care which markup parser answers.

use std::fmt;

/// What to look for in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationQuery {
    /// Element whose first occurrence holds the declarations
    pub container: String,
    /// Name of the declaration elements (immediate children only)
    pub element: String,
    /// Attribute holding the key
    pub key_attribute: String,
    /// Attribute holding the value
    pub value_attribute: String,
}

impl Default for DeclarationQuery {
    fn default() -> Self {
        Self {
            container: "appSettings".to_string(),
            element: "add".to_string(),
            key_attribute: "key".to_string(),
            value_attribute: "value".to_string(),
        }
    }
}

/// One declaration element as found in the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    /// Key attribute, if present
    pub key: Option<String>,
    /// Value attribute, if present
    pub value: Option<String>,
}

/// The document could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub message: String,
    /// Byte offset where parsing stopped, when known
    pub position: Option<u64>,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
        }
    }

    pub fn at(message: impl Into<String>, position: u64) -> Self {
        Self {
            message: message.into(),
            position: Some(position),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} (at byte {})", self.message, pos),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for QueryError {}

/// Structured document query
///
/// Returns the declarations of the first matching container in document
/// order, or an empty list when no container exists. Malformed documents
/// are an error, never a partial result.
pub trait DocumentQuery: Send + Sync {
    fn declarations(
        &self,
        document: &str,
        query: &DeclarationQuery,
    ) -> Result<Vec<Declaration>, QueryError>;
}
