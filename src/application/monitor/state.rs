//! Monitor lifecycle types

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::services::DiffResult;

/// Where a monitor is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    /// Input or output not selected yet
    Idle,
    /// Both handles attached; initial class not written yet
    Ready,
    /// Initial class written; polling for changes
    Monitoring,
}

/// What a single tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Monitor is `Idle`; nothing to do
    NotReady,
    /// First extract+write cycle succeeded
    Initialized { keys: usize },
    /// Modification time unchanged; nothing read
    Unchanged,
    /// File changed but its key set did not; output left alone
    Touched,
    /// Keys changed and the output was rewritten
    Regenerated(DiffResult),
    /// The cycle failed and was reported; state not advanced
    Failed { kind: &'static str },
}

/// Cancels a running monitor between ticks
///
/// Clone it into a Ctrl+C handler or another thread. A tick already in
/// progress always completes.
#[derive(Debug, Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl Default for StopHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl StopHandle {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Request the loop to stop after the current tick
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}
