//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod identifier;
mod language;

pub use identifier::Identifier;
pub use language::TargetLanguage;
