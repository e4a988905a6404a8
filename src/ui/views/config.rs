use keymirror::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::OutputStyle;

/// Unknown-key warnings; empty when there are none
pub fn render_config_warnings(warnings: &[ConfigWarning], style: OutputStyle) -> String {
    if warnings.is_empty() {
        return String::new();
    }
    let mut block = WarningBlock::new("Config warnings");
    for warning in warnings {
        block.add_line(warning.to_string());
    }
    block.render(style.color, style.unicode)
}
