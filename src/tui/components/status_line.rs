//! # StatusLine and Footer Components
//!
//! Two single-row, stateless components shown under both windows:
//!
//! - `StatusLine`: the controller's last advisory message, styled by kind
//!   (warnings for rejected submissions, info for added/removed books).
//! - `Footer`: the key bindings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::core::state::{StatusKind, StatusMessage};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const FOOTER_TEXT: &str = "ctrl+a: add book • ctrl+b: show books • ctrl+d: delete • esc: exit";

pub struct StatusLine<'a> {
    pub status: Option<&'a StatusMessage>,
    pub theme: &'a Theme,
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(status) = self.status else {
            return;
        };
        let style = match status.kind {
            StatusKind::Info => self.theme.info,
            StatusKind::Warning => self.theme.warning,
        };
        frame.render_widget(Span::styled(status.text.as_str(), style), area);
    }
}

pub struct Footer<'a> {
    pub theme: &'a Theme,
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::styled(FOOTER_TEXT, self.theme.footer), area);
    }
}
