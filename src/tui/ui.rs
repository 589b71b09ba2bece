use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use crate::core::snapshot::Snapshot;
use crate::core::state::Mode;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AddForm, Footer, LibraryList, StatusLine};

/// Draw one frame for `snapshot`.
pub fn draw_ui(frame: &mut Frame, snapshot: &Snapshot, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    // One row/two columns of breathing room around everything
    let area = frame.area().inner(Margin::new(2, 1));
    let layout = Layout::vertical([Min(0), Length(1), Length(1)]);
    let [main_area, status_area, footer_area] = layout.areas(area);

    match snapshot.mode {
        Mode::AddForm => draw_add_form(frame, main_area, snapshot, tui),
        Mode::ListView => {
            LibraryList::new(
                &snapshot.items,
                snapshot.selection,
                &tui.theme,
                &mut tui.library_list,
            )
            .render(frame, main_area);
        }
    }

    StatusLine {
        status: snapshot.status.as_ref(),
        theme: &tui.theme,
    }
    .render(frame, status_area);
    Footer { theme: &tui.theme }.render(frame, footer_area);
}

fn draw_add_form(frame: &mut Frame, area: Rect, snapshot: &Snapshot, tui: &TuiState) {
    let mut form = AddForm::new(snapshot, &tui.theme);
    let [form_area, _] =
        Layout::vertical([Constraint::Length(form.height()), Constraint::Min(0)]).areas(area);
    form.render(frame, form_area);
}
