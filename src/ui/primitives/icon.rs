use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Added,
    Removed,
    Watch,
    Key,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Added) => theme::icons::ADDED,
            (true, Icon::Removed) => theme::icons::REMOVED,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::Key) => theme::icons::KEY,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Added) => theme::icons_ascii::ADDED,
            (false, Icon::Removed) => theme::icons_ascii::REMOVED,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::Key) => theme::icons_ascii::KEY,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Added => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Removed => theme::colors::WARNING,
            Icon::Watch | Icon::Key => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
