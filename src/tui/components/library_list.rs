//! # LibraryList Component
//!
//! Bordered, scrollable list of books with the current selection
//! highlighted. Each book takes two rows: title, then author.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListState` lives in `TuiState` (scroll offset survives between frames)
//! - `LibraryList` is created each frame with borrowed state and the
//!   snapshot's items as props

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};

use crate::core::library::BookRecord;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// What one list row shows for a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Project a record onto a list row.
pub fn display_row(record: &BookRecord) -> DisplayRow<'_> {
    DisplayRow {
        title: record.title(),
        description: record.author(),
    }
}

pub struct LibraryList<'a> {
    pub items: &'a [BookRecord],
    pub selection: Option<usize>,
    pub theme: &'a Theme,
    state: &'a mut ListState,
}

impl<'a> LibraryList<'a> {
    pub fn new(
        items: &'a [BookRecord],
        selection: Option<usize>,
        theme: &'a Theme,
        state: &'a mut ListState,
    ) -> Self {
        Self {
            items,
            selection,
            theme,
            state,
        }
    }

    fn list_item(&self, index: usize, row: DisplayRow<'a>) -> ListItem<'a> {
        let selected = self.selection == Some(index);
        let (marker, title_style, description_style) = if selected {
            ("│ ", self.theme.selected, self.theme.focused)
        } else {
            ("  ", Default::default(), self.theme.description)
        };
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(marker, title_style),
                Span::styled(row.title, title_style),
            ]),
            Line::from(vec![
                Span::styled(marker, title_style),
                Span::styled(row.description, description_style),
            ]),
        ])
    }
}

impl Component for LibraryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" Library ({}) ", self.items.len()))
            .padding(Padding::horizontal(1));

        if self.items.is_empty() {
            self.state.select(None);
            let empty = Paragraph::new("No books yet.")
                .style(self.theme.blurred)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, record)| self.list_item(index, display_row(record)))
            .collect();

        self.state.select(self.selection);
        frame.render_stateful_widget(List::new(items).block(block), area, &mut *self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(items: &[BookRecord], selection: Option<usize>, state: &mut ListState) -> String {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                LibraryList::new(items, selection, &theme, state).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_display_row_projection() {
        let record = BookRecord::new("Dune", "Herbert");
        assert_eq!(
            display_row(&record),
            DisplayRow {
                title: "Dune",
                description: "Herbert"
            }
        );
    }

    #[test]
    fn test_renders_titles_and_authors() {
        let items = vec![
            BookRecord::new("Dune", "Herbert"),
            BookRecord::new("Emma", "Austen"),
        ];
        let mut state = ListState::default();
        let text = render_text(&items, Some(1), &mut state);
        assert!(text.contains("Library (2)"));
        assert!(text.contains("Dune"));
        assert!(text.contains("Herbert"));
        assert!(text.contains("│ Emma"));
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_empty_library_message() {
        let mut state = ListState::default();
        state.select(Some(3));
        let text = render_text(&[], None, &mut state);
        assert!(text.contains("No books yet."));
        assert_eq!(state.selected(), None);
    }
}
