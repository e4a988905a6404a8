//! Key Extractor Domain Service
//!
//! Turns a document into a `KeySnapshot`. The markup parsing itself happens
//! behind the `DocumentQuery` port.

use crate::domain::entities::{KeyEntry, KeySnapshot};
use crate::domain::ports::{DeclarationQuery, DocumentQuery};
use crate::error::{KeymirrorError, KeymirrorResult};
use crate::infrastructure::xml::QuickXmlQuery;

/// Element and attribute names the extractor looks for
pub type ExtractRules = DeclarationQuery;

/// Extracts key/value declarations from a document
#[derive(Debug, Clone, Default)]
pub struct KeyExtractor<Q = QuickXmlQuery> {
    query: Q,
    rules: ExtractRules,
}

impl KeyExtractor<QuickXmlQuery> {
    /// Extractor with the default XML backend and `appSettings/add` rules
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Q: DocumentQuery> KeyExtractor<Q> {
    /// Extractor over a custom query backend
    pub fn with_query(query: Q) -> Self {
        Self {
            query,
            rules: ExtractRules::default(),
        }
    }

    /// Replace the element/attribute names
    pub fn with_rules(mut self, rules: ExtractRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &ExtractRules {
        &self.rules
    }

    /// Extract, treating malformed input as a document without keys
    pub fn extract(&self, document: &str) -> KeySnapshot {
        self.try_extract(document, "document")
            .unwrap_or_else(|_| KeySnapshot::empty())
    }

    /// Extract, reporting malformed input as `ParseFailure`
    ///
    /// A missing container is not a failure; it yields an empty snapshot.
    pub fn try_extract(&self, document: &str, source_name: &str) -> KeymirrorResult<KeySnapshot> {
        let declarations = self
            .query
            .declarations(document, &self.rules)
            .map_err(|e| KeymirrorError::ParseFailure {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;

        let found = declarations.len();
        let snapshot: KeySnapshot = declarations
            .into_iter()
            .filter_map(|decl| match decl.key {
                Some(key) if !key.is_empty() => {
                    Some(KeyEntry::new(key, decl.value.unwrap_or_default()))
                }
                _ => None,
            })
            .collect();

        tracing::trace!(
            source = source_name,
            declarations = found,
            keys = snapshot.len(),
            "extracted keys"
        );
        Ok(snapshot)
    }
}
