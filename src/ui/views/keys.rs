use keymirror::domain::entities::KeySnapshot;
use keymirror::domain::value_objects::Identifier;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::OutputStyle;

/// Key listing with the identifier each key derives
pub fn render_keys(source: &str, snapshot: &KeySnapshot, style: OutputStyle) -> String {
    let mut header = CommandHeader::new(Icon::Key, "keymirror keys");
    header.add("Input", source);
    header.add("Keys", snapshot.len().to_string());
    let mut out = header.render(style.color, style.unicode);

    if snapshot.is_empty() {
        out.push_str(&ColoredText::dim("(no keys found)").render(style.color));
        out.push('\n');
        return out;
    }

    let width = snapshot
        .keys()
        .map(|k| k.chars().count())
        .max()
        .unwrap_or(0);
    for entry in snapshot {
        let ident = Identifier::derive(entry.key());
        out.push_str(&format!(
            "  {:<width$}  {}  {}\n",
            entry.key(),
            ColoredText::info(ident.as_str()).render(style.color),
            ColoredText::dim(entry.value()).render(style.color),
            width = width
        ));
    }
    out
}
