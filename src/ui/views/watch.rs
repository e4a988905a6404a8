use keymirror::application::monitor::{MonitorEvent, Notification};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::OutputStyle;

pub fn render_watch_header(source: &str, output: &str, language: &str, style: OutputStyle) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "keymirror watch");
    header.add("Input", source);
    header.add("Output", output);
    header.add("Language", language);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(style.color, style.unicode)
}

pub fn render_notification(notification: &Notification, style: OutputStyle) -> String {
    let prefix = ColoredText::dim(format!("[{}]", notification.clock())).render(style.color);
    let icon = |icon: Icon| icon.colored(style.color, style.unicode);

    match &notification.event {
        MonitorEvent::MonitorStarted { .. } => format!(
            "{} {} {}\n",
            prefix,
            icon(Icon::Watch),
            notification.event.message()
        ),
        MonitorEvent::Generated { .. } => format!(
            "{} {} {}\n",
            prefix,
            icon(Icon::Success),
            notification.event.message()
        ),
        MonitorEvent::KeysChanged {
            added,
            removed,
            output,
            keys,
        } => {
            let mut out = format!(
                "{} {} Regenerated {} ({} keys)\n",
                prefix,
                icon(Icon::Success),
                output,
                keys
            );
            for key in added {
                out.push_str(&format!("    {} {}\n", icon(Icon::Added), key));
            }
            for key in removed {
                out.push_str(&format!("    {} {}\n", icon(Icon::Removed), key));
            }
            out
        }
        MonitorEvent::Error { message, .. } => format!(
            "{} {} {}\n",
            prefix,
            icon(Icon::Error),
            ColoredText::error(message.as_str()).render(style.color)
        ),
        MonitorEvent::Shutdown => format!(
            "\n{} {} {}\n",
            prefix,
            icon(Icon::Watch),
            notification.event.message()
        ),
    }
}
