//! Infrastructure Adapters
//!
//! These adapters implement the ClassRenderer port from the domain layer.
//! They turn derived identifiers and raw entries into source text.

pub mod csharp;
pub mod escaping;
pub mod rust;

pub use csharp::CSharpRenderer;
pub use rust::RustRenderer;

use crate::domain::ports::ClassRenderer;
use crate::domain::value_objects::TargetLanguage;

/// Get all available renderers
pub fn all_renderers() -> Vec<Box<dyn ClassRenderer>> {
    TargetLanguage::ALL.iter().map(|&l| get_renderer(l)).collect()
}

/// Get renderer for a specific language
pub fn get_renderer(language: TargetLanguage) -> Box<dyn ClassRenderer> {
    match language {
        TargetLanguage::CSharp => Box::new(CSharpRenderer::new()),
        TargetLanguage::Rust => Box::new(RustRenderer::new()),
    }
}
