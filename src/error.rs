//! Error types for keymirror
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for keymirror operations
pub type KeymirrorResult<T> = Result<T, KeymirrorError>;

/// Main error type for keymirror operations
#[derive(Error, Debug)]
pub enum KeymirrorError {
    /// The user aborted a file selection prompt
    #[error("{what} selection cancelled")]
    SelectionCancelled { what: String },

    /// The watched document is not well-formed
    #[error("cannot parse {source_name}: {message}")]
    ParseFailure {
        source_name: String,
        message: String,
    },

    /// The output sink rejected a write
    #[error("cannot write {sink}: {cause}")]
    WriteFailure { sink: String, cause: FsError },

    /// Any other failure inside a single poll cycle
    #[error("poll of {source_name} failed: {cause}")]
    TickFailure { source_name: String, cause: FsError },

    /// Monitoring was started before both file handles were attached
    #[error("monitor is not ready: {missing} not selected")]
    NotReady { missing: &'static str },

    /// Config file could not be read or deserialized
    #[error("invalid config in {file}: {message}")]
    ConfigInvalid { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeymirrorError {
    /// Short machine-readable label used in NDJSON output
    pub fn kind(&self) -> &'static str {
        match self {
            KeymirrorError::SelectionCancelled { .. } => "selection_cancelled",
            KeymirrorError::ParseFailure { .. } => "parse_failure",
            KeymirrorError::WriteFailure { .. } => "write_failure",
            KeymirrorError::TickFailure { .. } => "tick_failure",
            KeymirrorError::NotReady { .. } => "not_ready",
            KeymirrorError::ConfigInvalid { .. } => "config_invalid",
            KeymirrorError::Io(_) => "io",
        }
    }
}
