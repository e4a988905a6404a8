//! File handle ports - the watched document and the generated output
//!
//! The monitor only ever sees these traits. The CLI hands it local files;
//! tests hand it in-memory doubles.

use std::path::PathBuf;
use std::time::SystemTime;

/// Result type for file handle operations
pub type FsResult<T> = Result<T, FsError>;

/// File handle operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Convert an I/O error, attaching the path it happened on
    pub fn at(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.into()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.into()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(PathBuf::new(), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// A readable document that is polled for changes
pub trait WatchedSource {
    /// Read the full document text
    fn read_content(&self) -> FsResult<String>;

    /// Last modification time, used for the cheap "unchanged" check
    fn modified_time(&self) -> FsResult<SystemTime>;

    /// Name shown in notifications
    fn describe(&self) -> String;
}

/// A writable destination for generated output
pub trait OutputSink {
    /// Replace the sink's content
    fn write(&mut self, content: &str) -> FsResult<()>;

    /// Name shown in notifications
    fn describe(&self) -> String;
}

impl<T: WatchedSource + ?Sized> WatchedSource for Box<T> {
    fn read_content(&self) -> FsResult<String> {
        (**self).read_content()
    }

    fn modified_time(&self) -> FsResult<SystemTime> {
        (**self).modified_time()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: OutputSink + ?Sized> OutputSink for Box<T> {
    fn write(&mut self, content: &str) -> FsResult<()> {
        (**self).write(content)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
