//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::TargetLanguage;
use crate::error::{KeymirrorError, KeymirrorResult};

use super::types::{ColorMode, Config};

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "keymirror.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> KeymirrorResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| KeymirrorError::ConfigInvalid {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Candidate config files, most specific first
pub fn config_paths(working_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = working_dir {
        paths.push(dir.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_dir) = dirs::config_dir() {
        paths.push(user_dir.join("keymirror").join("config.toml"));
    }
    paths
}

/// Load from working directory config, user config, or defaults
///
/// Unknown keys are logged; use `load_or_default_with_warnings` to show
/// them to the user instead.
pub fn load_or_default(working_dir: Option<&Path>) -> Config {
    let (config, warnings) = load_or_default_with_warnings(working_dir);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    config
}

/// Same lookup as `load_or_default`, returning the chosen file's warnings
pub fn load_or_default_with_warnings(working_dir: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    for path in config_paths(working_dir) {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => return (with_env_overrides(config), warnings),
            Err(e) => tracing::warn!(error = %e, "ignoring config file"),
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Apply environment variable overrides (KEYMIRROR_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable lookup
pub(crate) fn apply_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // KEYMIRROR_INTERVAL_MS
    if let Some(ms) = var("KEYMIRROR_INTERVAL_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
        config.watch.interval_ms = ms;
    }

    // KEYMIRROR_LANGUAGE
    if let Some(language) = var("KEYMIRROR_LANGUAGE").and_then(|v| TargetLanguage::from_str_loose(&v)) {
        config.generate.language = language;
    }

    // KEYMIRROR_CLASS_NAME
    if let Some(name) = var("KEYMIRROR_CLASS_NAME").filter(|v| !v.trim().is_empty()) {
        config.generate.class_name = name;
    }

    // KEYMIRROR_COLOR
    if let Some(color) = var("KEYMIRROR_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "watch",
        "interval_ms",
        "extract",
        "container",
        "element",
        "key_attribute",
        "value_attribute",
        "generate",
        "language",
        "class_name",
        "namespace",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
