use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::OutputStyle;

pub fn render_generated(output: &str, keys: usize, language: &str, style: OutputStyle) -> String {
    format!(
        "{} Generated {} ({} keys, {})\n",
        Icon::Success.colored(style.color, style.unicode),
        ColoredText::success(output).render(style.color),
        keys,
        language
    )
}
