//! TargetLanguage value object - which language the class is rendered in

use serde::{Deserialize, Serialize};

/// Language of the generated class file
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// C# static class with `const string` fields
    #[default]
    #[serde(alias = "cs", alias = "c#")]
    #[value(name = "csharp", alias = "cs")]
    CSharp,
    /// Rust unit struct with associated `&str` constants
    #[serde(alias = "rs")]
    #[value(alias = "rs")]
    Rust,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::CSharp, TargetLanguage::Rust];

    /// Conventional file extension for generated output
    pub fn file_extension(&self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "cs",
            TargetLanguage::Rust => "rs",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "C#",
            TargetLanguage::Rust => "Rust",
        }
    }

    /// Parse a config or environment value
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Some(TargetLanguage::CSharp),
            "rust" | "rs" => Some(TargetLanguage::Rust),
            _ => None,
        }
    }
}
