//! # AddForm Component
//!
//! The "Add a book." window: one prompt line per input field and a
//! `[ Submit ]` button underneath.
//!
//! Stateless. Everything comes from the snapshot, styled by the `Theme` it is given. When a text field
//! has focus the terminal cursor is placed inside it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::snapshot::{FieldView, Snapshot};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

const HEADER: &str = "Add a book.";
const PROMPT: &str = "> ";
/// Header line plus the blank line after it
const FIELDS_OFFSET: u16 = 2;

pub struct AddForm<'a> {
    pub snapshot: &'a Snapshot,
    pub theme: &'a Theme,
}

impl<'a> AddForm<'a> {
    pub fn new(snapshot: &'a Snapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }

    /// Rows used by the header, fields, gap and button.
    pub fn height(&self) -> u16 {
        FIELDS_OFFSET + self.snapshot.fields.len() as u16 + 2
    }

    fn field_line(&self, field: &'a FieldView) -> Line<'a> {
        let style = if field.focused {
            self.theme.focused
        } else {
            Default::default()
        };
        let text = if field.value.is_empty() {
            Span::styled(field.placeholder.as_str(), self.theme.blurred)
        } else {
            Span::styled(field.value.as_str(), style)
        };
        Line::from(vec![Span::styled(PROMPT, style), text])
    }

    fn button_line(&self) -> Line<'a> {
        if self.snapshot.submit_focused {
            Line::from(Span::styled("[ Submit ]", self.theme.focused))
        } else {
            Line::from(vec![
                Span::raw("[ "),
                Span::styled("Submit", self.theme.blurred),
                Span::raw(" ]"),
            ])
        }
    }
}

impl Component for AddForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::styled(HEADER, self.theme.header), Line::default()];
        lines.extend(self.snapshot.fields.iter().map(|field| self.field_line(field)));
        lines.push(Line::default());
        lines.push(self.button_line());

        frame.render_widget(Paragraph::new(lines), area);

        if let Some((index, field)) = self.snapshot.focused_field() {
            let before_cursor: String = field.value.chars().take(field.cursor).collect();
            let column = (PROMPT.width() + before_cursor.width()) as u16;
            let x = (area.x + column).min(area.right().saturating_sub(1));
            let y = area.y + FIELDS_OFFSET + index as u16;
            if y < area.bottom() {
                frame.set_cursor_position((x, y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::core::state::Mode;

    fn field(value: &str, placeholder: &str, focused: bool) -> FieldView {
        FieldView {
            value: value.to_string(),
            cursor: value.chars().count(),
            focused,
            placeholder: placeholder.to_string(),
        }
    }

    fn form_snapshot(fields: Vec<FieldView>, submit_focused: bool) -> Snapshot {
        Snapshot {
            mode: Mode::AddForm,
            fields,
            submit_focused,
            items: Vec::new(),
            selection: None,
            status: None,
        }
    }

    fn render_lines(fields: Vec<FieldView>, submit_focused: bool) -> (Vec<String>, Terminal<TestBackend>) {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let snapshot = form_snapshot(fields, submit_focused);
        terminal
            .draw(|f| {
                AddForm::new(&snapshot, &theme).render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let lines = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect();
        (lines, terminal)
    }

    #[test]
    fn test_renders_placeholders_and_button() {
        let fields = vec![field("", "Title", true), field("", "Author", false)];
        let (lines, _) = render_lines(fields, false);
        assert_eq!(lines[0], "Add a book.");
        assert_eq!(lines[2], "> Title");
        assert_eq!(lines[3], "> Author");
        assert_eq!(lines[5], "[ Submit ]");
    }

    #[test]
    fn test_renders_values() {
        let fields = vec![field("Dune", "Title", false), field("Herbert", "Author", false)];
        let (lines, _) = render_lines(fields, true);
        assert_eq!(lines[2], "> Dune");
        assert_eq!(lines[3], "> Herbert");
    }

    #[test]
    fn test_cursor_sits_in_focused_field() {
        let fields = vec![field("Dune", "Title", false), field("Her", "Author", true)];
        let (_, mut terminal) = render_lines(fields, false);
        let position = terminal.get_cursor_position().unwrap();
        assert_eq!((position.x, position.y), (5, 3));
    }

    #[test]
    fn test_height_counts_every_row() {
        let fields = vec![field("", "Title", true), field("", "Author", false)];
        let theme = Theme::default();
        let snapshot = form_snapshot(fields, false);
        assert_eq!(AddForm::new(&snapshot, &theme).height(), 6);
    }
}
