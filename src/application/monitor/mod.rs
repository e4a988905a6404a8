//! Monitor Use Case
//!
//! Continuous polling of one watched document with regeneration of one
//! output file. It orchestrates:
//! - Cheap modification-time checks on every tick
//! - Key extraction and key-presence diffing against the accepted snapshot
//! - Class regeneration and a human-readable change summary
//!
//! ## Architecture
//!
//! - `FileMonitor` - Owns both handles and the accepted snapshot
//! - `MonitorState` - `Idle` → `Ready` → `Monitoring`
//! - `Notification` - Timestamped events delivered to the caller
//!
//! ## Usage
//!
//! ```ignore
//! let mut monitor = FileMonitor::new(options, extractor, generator);
//! monitor.attach_source(LocalFile::new("web.config"));
//! monitor.attach_sink(LocalFile::new("AppSettings.cs"));
//! let stop = monitor.stop_handle();
//! monitor.run(|n| println!("{}", n.message()))?;
//! ```

mod event;
mod state;
mod use_case;


pub use event::{MonitorEvent, MonitorOptions, Notification, DEFAULT_INTERVAL_MS, POLL_SLICE_MS};
pub use state::{MonitorState, StopHandle, TickOutcome};
pub use use_case::FileMonitor;
