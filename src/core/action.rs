//! # Actions
//!
//! Everything that can happen in Shelf becomes an `Action`.
//! User presses Tab? That's `Action::Next`.
//! User hits Enter on the submit button? That's `Action::Confirm`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what to do next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! `update()` is total: every action has a defined result in every mode,
//! even if that result is "nothing changed, render again".

use log::{debug, error, info, warn};

use crate::core::form::{FocusTarget, TextEdit, ValidationError};
use crate::core::input_field::CursorMove;
use crate::core::state::{Mode, NavigationController, StatusMessage};

/// Step direction shared by form focus (wraps) and list selection (clamps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Text editing (AddForm only)
    TextInsert(char),
    TextPaste(String),
    TextDeleteBackward,
    TextDeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Navigation
    Next,
    Previous,
    Confirm,
    SwitchToAdd,
    SwitchToList,
    Delete,
    Quit,

    /// Layout only; the model does not change.
    Resize(u16, u16),
}

/// What the adapter should do after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Render,
    Quit,
}

/// Glyphs cycled through in the "added to your library" message.
const BOOK_GLYPHS: [&str; 7] = ["📔", "📕", "📖", "📗", "📘", "📙", "📓"];

pub fn update(app: &mut NavigationController, action: Action) -> Effect {
    if !app.running {
        return Effect::Quit;
    }
    debug!("update({:?}) in {:?}", action, app.mode);

    match action {
        Action::Quit => {
            info!("Quit requested");
            app.running = false;
            return Effect::Quit;
        }
        Action::Resize(width, height) => {
            debug!("Resize to {}x{}", width, height);
        }
        Action::SwitchToAdd => switch_to_add(app),
        Action::SwitchToList => switch_to_list(app),
        Action::Next => step(app, Direction::Next),
        Action::Previous => step(app, Direction::Previous),
        Action::Confirm => confirm(app),
        Action::Delete => delete_selected(app),
        Action::TextInsert(c) => edit(app, TextEdit::Insert(c)),
        Action::TextPaste(text) => edit(app, TextEdit::Paste(text)),
        Action::TextDeleteBackward => edit(app, TextEdit::DeleteBackward),
        Action::TextDeleteForward => edit(app, TextEdit::DeleteForward),
        Action::CursorLeft => edit(app, TextEdit::Cursor(CursorMove::Left)),
        Action::CursorRight => edit(app, TextEdit::Cursor(CursorMove::Right)),
        Action::CursorHome => edit(app, TextEdit::Cursor(CursorMove::Home)),
        Action::CursorEnd => edit(app, TextEdit::Cursor(CursorMove::End)),
    }
    Effect::Render
}

fn switch_to_add(app: &mut NavigationController) {
    if app.mode != Mode::AddForm {
        info!("Mode: {:?} -> AddForm", app.mode);
    }
    app.mode = Mode::AddForm;
    app.form.focus_first();
    app.status = None;
}

fn switch_to_list(app: &mut NavigationController) {
    if app.mode == Mode::ListView {
        return;
    }
    info!("Mode: AddForm -> ListView");
    app.mode = Mode::ListView;
    app.form.blur_all();
    app.status = None;
}

fn step(app: &mut NavigationController, direction: Direction) {
    match app.mode {
        Mode::AddForm => app.form.advance_focus(direction),
        Mode::ListView => app.library.move_selection(direction),
    }
}

fn confirm(app: &mut NavigationController) {
    if app.mode != Mode::AddForm {
        return;
    }
    // Enter on a text field moves down, like Tab.
    if let FocusTarget::Field(_) = app.form.focus_target() {
        app.form.advance_focus(Direction::Next);
        return;
    }

    match app.form.try_submit() {
        Ok(record) => {
            let glyph = BOOK_GLYPHS[app.library.len() % BOOK_GLYPHS.len()];
            info!("Added \"{}\" by {}", record.title(), record.author());
            let text = format!("[{} {}] added to your library.", glyph, record.title());
            app.library.insert_front(record);
            switch_to_list(app);
            app.status = Some(StatusMessage::info(text));
        }
        Err(err @ ValidationError::EmptyField { .. }) => {
            warn!("Submission rejected: {}", err);
            app.status = Some(StatusMessage::warning(format!("⚠ {err}!")));
        }
        Err(err @ ValidationError::SubmitNotFocused) => {
            error!("Submission attempted off the submit button: {}", err);
        }
    }
}

fn delete_selected(app: &mut NavigationController) {
    if app.mode != Mode::ListView {
        return;
    }
    let Some(index) = app.library.selection() else {
        return;
    };
    match app.library.remove_at(index) {
        Ok(record) => {
            info!("Deleted \"{}\"", record.title());
            app.status = Some(StatusMessage::info(format!("Removed {}.", record.title())));
        }
        Err(err) => error!("Delete failed: {}", err),
    }
}

fn edit(app: &mut NavigationController, edit: TextEdit) {
    if app.mode != Mode::AddForm {
        return;
    }
    app.form.edit(edit);
}
