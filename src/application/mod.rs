//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `FileMonitor` - Polls the watched document and regenerates the class on key changes

pub mod monitor;

pub use monitor::{
    FileMonitor, MonitorEvent, MonitorOptions, MonitorState, Notification, StopHandle,
    TickOutcome, DEFAULT_INTERVAL_MS, POLL_SLICE_MS,
};
