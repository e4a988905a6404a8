//! In-memory file handle
//!
//! A shared buffer with a logical modification clock. Clones share state, so
//! a test can keep one handle while the monitor owns another.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::ports::file_system::{FsError, FsResult, OutputSink, WatchedSource};

#[derive(Debug, Default)]
struct MemoryState {
    content: String,
    version: u64,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory implementation of both file ports
#[derive(Debug, Clone, Default)]
pub struct MemoryFile {
    name: String,
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(Mutex::new(MemoryState {
                content: content.into(),
                version: 1,
                ..MemoryState::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the content and advance the modification time
    pub fn set_content(&self, content: impl Into<String>) {
        let mut state = self.lock();
        state.content = content.into();
        state.version += 1;
    }

    /// Advance the modification time without changing content
    pub fn touch(&self) {
        self.lock().version += 1;
    }

    pub fn content(&self) -> String {
        self.lock().content.clone()
    }

    /// Number of successful writes through the sink port
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    pub fn fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }
}

impl WatchedSource for MemoryFile {
    fn read_content(&self) -> FsResult<String> {
        let state = self.lock();
        if state.fail_reads {
            return Err(FsError::Other(format!("{} is unreadable", self.name)));
        }
        Ok(state.content.clone())
    }

    fn modified_time(&self) -> FsResult<SystemTime> {
        let state = self.lock();
        if state.fail_reads {
            return Err(FsError::Other(format!("{} is unreadable", self.name)));
        }
        Ok(UNIX_EPOCH + Duration::from_secs(state.version))
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

impl OutputSink for MemoryFile {
    fn write(&mut self, content: &str) -> FsResult<()> {
        let mut state = self.lock();
        if state.fail_writes {
            return Err(FsError::PermissionDenied(self.name.clone().into()));
        }
        state.content = content.to_string();
        state.version += 1;
        state.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
