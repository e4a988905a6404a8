//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::monitor::{MonitorOptions, DEFAULT_INTERVAL_MS};
use crate::domain::services::{ExtractRules, GeneratorOptions};
use crate::domain::value_objects::TargetLanguage;
use crate::error::KeymirrorResult;

use super::loader::{self, ConfigWarning};

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Polling interval in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

/// Which elements and attributes hold the keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default = "default_container")]
    pub container: String,

    #[serde(default = "default_element")]
    pub element: String,

    #[serde(default = "default_key_attribute")]
    pub key_attribute: String,

    #[serde(default = "default_value_attribute")]
    pub value_attribute: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            container: default_container(),
            element: default_element(),
            key_attribute: default_key_attribute(),
            value_attribute: default_value_attribute(),
        }
    }
}

fn default_container() -> String {
    "appSettings".to_string()
}

fn default_element() -> String {
    "add".to_string()
}

fn default_key_attribute() -> String {
    "key".to_string()
}

fn default_value_attribute() -> String {
    "value".to_string()
}

/// Generated class configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default)]
    pub language: TargetLanguage,

    #[serde(default = "default_class_name")]
    pub class_name: String,

    #[serde(default)]
    pub namespace: Option<String>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            language: TargetLanguage::default(),
            class_name: default_class_name(),
            namespace: None,
        }
    }
}

fn default_class_name() -> String {
    "AppSettings".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> KeymirrorResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> KeymirrorResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from working directory config, user config, or defaults
    pub fn load_or_default(working_dir: Option<&Path>) -> Self {
        loader::load_or_default(working_dir)
    }

    /// Default lookup chain, keeping unknown-key warnings for the caller
    pub fn load_or_default_with_warnings(working_dir: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default_with_warnings(working_dir)
    }

    /// Apply environment variable overrides (KEYMIRROR_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn monitor_options(&self) -> MonitorOptions {
        MonitorOptions::default().with_interval_ms(self.watch.interval_ms)
    }

    pub fn extract_rules(&self) -> ExtractRules {
        ExtractRules {
            container: self.extract.container.clone(),
            element: self.extract.element.clone(),
            key_attribute: self.extract.key_attribute.clone(),
            value_attribute: self.extract.value_attribute.clone(),
        }
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions::default()
            .with_language(self.generate.language)
            .with_class_name(self.generate.class_name.clone())
            .with_namespace(self.generate.namespace.clone())
    }
}
