//! ClassRenderer port - language-specific class emission
//!
//! Renderers receive entries with their identifiers already derived and only
//! decide syntax: wrapper, field declarations, doc comments, escaping.

use crate::domain::entities::KeyEntry;
use crate::domain::value_objects::{Identifier, TargetLanguage};

/// Inputs shared by every rendered field
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Name of the generated class
    pub class_name: &'a Identifier,
    /// C# namespace, or Rust module doc line
    pub namespace: Option<&'a str>,
}

/// Renders a class definition for one target language
pub trait ClassRenderer: Send + Sync {
    /// Language this renderer emits
    fn language(&self) -> TargetLanguage;

    /// Render the whole file
    ///
    /// Must be a pure function of its arguments.
    fn render(&self, ctx: &RenderContext<'_>, fields: &[(Identifier, &KeyEntry)]) -> String;
}
