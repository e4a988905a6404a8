//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod class_renderer;
pub mod document_query;
pub mod file_system;

pub use class_renderer::{ClassRenderer, RenderContext};
pub use document_query::{Declaration, DeclarationQuery, DocumentQuery, QueryError};
pub use file_system::{FsError, FsResult, OutputSink, WatchedSource};
