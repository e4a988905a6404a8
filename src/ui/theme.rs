use crossterm::style::Color;

/// Design tokens for the keymirror CLI.
///
/// All icons used by views must be sourced from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ADDED: &str = "+";
    pub const REMOVED: &str = "−";
    pub const WATCH: &str = "⟳";
    pub const KEY: &str = "⚿";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ADDED: &str = "+";
    pub const REMOVED: &str = "-";
    pub const WATCH: &str = "[~]";
    pub const KEY: &str = "[KEY]";
}
