//! Domain Services
//!
//! Pure business logic services that operate on snapshots.
//! These services have no I/O dependencies and are easily testable.

mod differ;
mod extractor;
mod generator;

pub use differ::{DiffResult, Differ};
pub use extractor::{ExtractRules, KeyExtractor};
pub use generator::{CodeGenerator, GeneratorOptions};
