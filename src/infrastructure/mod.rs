//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all parsing backends and file I/O.
//!
//! ## Structure
//!
//! - `fs/` - Local file handles for the watched document and output sink
//! - `xml` - `quick-xml` implementation of the document query port
//! - `adapters/` - Class renderers (C#, Rust)

pub mod adapters;
pub mod fs;
pub mod xml;

// Re-export for convenience
pub use adapters::{all_renderers, get_renderer, CSharpRenderer, RustRenderer};
pub use fs::{LocalFile, MemoryFile};
pub use xml::QuickXmlQuery;
