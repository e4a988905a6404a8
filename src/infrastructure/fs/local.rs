//! Local File Implementation
//!
//! Implements the WatchedSource and OutputSink ports for files on disk.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::file_system::{FsError, FsResult, OutputSink, WatchedSource};

/// A file on the local disk
///
/// Used both as the watched document and as the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WatchedSource for LocalFile {
    fn read_content(&self) -> FsResult<String> {
        std::fs::read_to_string(&self.path).map_err(|e| FsError::at(&self.path, e))
    }

    fn modified_time(&self) -> FsResult<SystemTime> {
        std::fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .map_err(|e| FsError::at(&self.path, e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

impl OutputSink for LocalFile {
    fn write(&mut self, content: &str) -> FsResult<()> {
        atomic_write(&self.path, content.as_bytes())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Write content to a file atomically
///
/// Creates parent directories, writes a sibling temp file, then renames it
/// over the target so readers never observe a half-written class. An
/// existing target keeps its permissions; a new one gets the same mode a
/// plain `File::create` would.
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| FsError::at(&parent, e))?;

    let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut tmp = temp_builder()
        .tempfile_in(&parent)
        .map_err(|e| FsError::at(&parent, e))?;
    tmp.write_all(content).map_err(|e| FsError::at(path, e))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| FsError::at(path, e))?;
    }
    tmp.as_file().sync_all().map_err(|e| FsError::at(path, e))?;
    tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
    Ok(())
}

/// Temp files default to owner-only; ask for 0666 and let the umask trim it
#[cfg(unix)]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = tempfile::Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    tempfile::Builder::new()
}
