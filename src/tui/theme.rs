//! Styles handed to components as a value. Nothing here is global.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Focused input prompt/text and the focused submit button
    pub focused: Style,
    /// Placeholders and the unfocused submit label
    pub blurred: Style,
    pub header: Style,
    pub footer: Style,
    pub info: Style,
    pub warning: Style,
    /// Highlighted library row
    pub selected: Style,
    /// Secondary line of a library row (author)
    pub description: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused: Style::default().fg(Color::Indexed(205)),
            blurred: Style::default().fg(Color::Indexed(240)),
            header: Style::default().add_modifier(Modifier::BOLD),
            footer: Style::default().fg(Color::Indexed(241)),
            info: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            selected: Style::default()
                .fg(Color::Indexed(205))
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::Indexed(245)),
        }
    }
}
