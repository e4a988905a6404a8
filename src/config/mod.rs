//! Configuration module for keymirror
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (KEYMIRROR_*)
//! 3. Working directory config (./keymirror.toml)
//! 4. User config (~/.config/keymirror/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, ExtractConfig, GenerateConfig, OutputConfig, WatchConfig};
