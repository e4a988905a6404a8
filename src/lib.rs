//! keymirror - mirrors configuration keys into generated source classes
//!
//! keymirror watches an XML configuration document (for example the
//! `<appSettings>` block of a `web.config`), extracts its declared keys and
//! writes a class with one constant per key. While watching, the class is
//! regenerated whenever a key is added or removed.
//!
//! The crate is layered:
//! - `domain`: entities, value objects, ports and the pure services
//!   (extractor, generator, differ)
//! - `infrastructure`: quick-xml query, language renderers, file handles
//! - `application`: the polling `FileMonitor`
//! - `config`: layered TOML configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::monitor::{
    FileMonitor, MonitorEvent, MonitorOptions, MonitorState, Notification, StopHandle, TickOutcome,
};
pub use config::Config;
pub use domain::entities::{KeyEntry, KeySnapshot};
pub use domain::services::{CodeGenerator, DiffResult, Differ, GeneratorOptions, KeyExtractor};
pub use domain::value_objects::{Identifier, TargetLanguage};
pub use error::{KeymirrorError, KeymirrorResult};
pub use infrastructure::{LocalFile, MemoryFile};
