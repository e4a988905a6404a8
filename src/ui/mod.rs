//! Terminal presentation for the keymirror CLI

pub mod blocks;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;

use keymirror::config::ColorMode;

/// Resolved output styling for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    pub color: bool,
    pub unicode: bool,
}

impl OutputStyle {
    /// Combine the configured color mode with what the terminal supports
    pub fn resolve(mode: ColorMode, unicode: bool, caps: terminal::TerminalCapabilities) -> Self {
        let color = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => caps.supports_color,
        };
        Self {
            color,
            unicode: unicode && caps.supports_unicode,
        }
    }

    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }
}
