//! Monitor event types and options

use std::time::Duration;

use chrono::{DateTime, Local};

/// Default polling cadence in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 2000;

/// Granularity of the sleep between ticks, so a stop request is seen quickly
pub const POLL_SLICE_MS: u64 = 50;

/// Monitor options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorOptions {
    /// Time between polls
    pub interval: Duration,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

impl MonitorOptions {
    /// Set the polling interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the polling interval in milliseconds (zero is clamped to one)
    pub fn with_interval_ms(self, ms: u64) -> Self {
        self.with_interval(Duration::from_millis(ms.max(1)))
    }
}

/// Monitor event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MonitorEvent {
    /// Monitoring loop started
    MonitorStarted {
        source: String,
        output: String,
        interval_ms: u64,
    },
    /// Initial class written
    Generated { output: String, keys: usize },
    /// Keys were added or removed and the class was rewritten
    KeysChanged {
        added: Vec<String>,
        removed: Vec<String>,
        output: String,
        keys: usize,
    },
    /// A cycle failed; monitoring continues
    Error { kind: String, message: String },
    /// Monitoring loop stopped
    Shutdown,
}

impl MonitorEvent {
    /// Human-readable status line
    pub fn message(&self) -> String {
        match self {
            MonitorEvent::MonitorStarted {
                source,
                output,
                interval_ms,
            } => format!(
                "Watching {} → {} (every {} ms)",
                source, output, interval_ms
            ),
            MonitorEvent::Generated { output, keys } => {
                format!("Generated {} ({} keys)", output, keys)
            }
            MonitorEvent::KeysChanged {
                added,
                removed,
                output,
                keys,
            } => format!(
                "Keys changed: added {}; removed {}. Regenerated {} ({} keys)",
                join_or_none(added),
                join_or_none(removed),
                output,
                keys
            ),
            MonitorEvent::Error { message, .. } => message.clone(),
            MonitorEvent::Shutdown => "Monitoring stopped".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MonitorEvent::Error { .. })
    }
}

fn join_or_none(keys: &[String]) -> String {
    if keys.is_empty() {
        "none".to_string()
    } else {
        keys.join(", ")
    }
}

/// An event stamped with the local time it was raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub at: DateTime<Local>,
    pub event: MonitorEvent,
}

impl Notification {
    /// Stamp `event` with the current time
    pub fn now(event: MonitorEvent) -> Self {
        Self {
            at: Local::now(),
            event,
        }
    }

    /// `HH:MM:SS` prefix used by the text renderer
    pub fn clock(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }

    /// Timestamped human-readable line
    pub fn message(&self) -> String {
        format!("[{}] {}", self.clock(), self.event.message())
    }

    /// Convert to JSON string with `command` and `at` fields included
    pub fn to_json(&self) -> String {
        self.to_json_for("watch")
    }

    /// Same as `to_json`, attributed to another command
    pub fn to_json_for(&self, command: &str) -> String {
        let mut value = serde_json::to_value(&self.event)
            .unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!(command));
            obj.insert("at".to_string(), serde_json::json!(self.at.to_rfc3339()));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
