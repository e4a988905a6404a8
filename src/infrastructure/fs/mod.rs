//! File System Implementations
//!
//! Implementations of the WatchedSource and OutputSink ports.

mod local;
mod memory;

pub use local::{atomic_write, LocalFile};
pub use memory::MemoryFile;
