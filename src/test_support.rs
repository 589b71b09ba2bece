//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use crate::core::action::{Action, update};
use crate::core::event_loop::Frontend;
use crate::core::form::{FormState, TextEdit};
use crate::core::library::{BookRecord, LibraryStore};
use crate::core::snapshot::Snapshot;
use crate::core::state::NavigationController;

/// Two-field form with "Title" / "Author" placeholders.
pub fn test_form() -> FormState {
    FormState::book_form("Title", 32, "Author", 64)
}

/// Form holding the given values with the submit button focused.
pub fn filled_form(title: &str, author: &str) -> FormState {
    let mut form = test_form();
    form.edit(TextEdit::Paste(title.to_string()));
    form.advance_focus(crate::core::action::Direction::Next);
    form.edit(TextEdit::Paste(author.to_string()));
    form.advance_focus(crate::core::action::Direction::Next);
    form
}

/// Three books: Dune, Neuromancer, Emma (in that order).
pub fn sample_library() -> LibraryStore {
    LibraryStore::with_records(vec![
        BookRecord::new("Dune", "Herbert"),
        BookRecord::new("Neuromancer", "Gibson"),
        BookRecord::new("Emma", "Austen"),
    ])
}

/// Controller with an empty library.
pub fn test_controller() -> NavigationController {
    NavigationController::new(test_form(), LibraryStore::new())
}

/// Controller seeded with `sample_library()`.
pub fn seeded_controller() -> NavigationController {
    NavigationController::new(test_form(), sample_library())
}

/// Send one `TextInsert` per char.
pub fn type_text(app: &mut NavigationController, text: &str) {
    for c in text.chars() {
        update(app, Action::TextInsert(c));
    }
}

/// Frontend that replays a fixed script and records every frame.
pub struct ScriptedFrontend {
    script: VecDeque<Option<Action>>,
    pub frames: Vec<Snapshot>,
}

impl ScriptedFrontend {
    pub fn new(script: Vec<Option<Action>>) -> Self {
        Self {
            script: script.into(),
            frames: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Frontend for ScriptedFrontend {
    fn next_action(&mut self) -> io::Result<Option<Action>> {
        self.script
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}
