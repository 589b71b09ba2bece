//! # Form State
//!
//! An ordered set of [`InputField`]s followed by a submit button.
//!
//! Focus moves over `N + 1` slots: the `N` fields, then the submit button.
//!
//! ```text
//! slot:   0        1         N (= 2)
//!       [Title] [Author] [ Submit ]
//!          ▲                  │
//!          └──── wraps ───────┘
//! ```
//!
//! Whenever the focus index changes, exactly the slot at that index is
//! focused and every other field is blurred. `blur_all()` is the single
//! exception, used while the form is hidden.

use log::debug;
use thiserror::Error;

use crate::core::action::Direction;
use crate::core::input_field::{CursorMove, InputField};
use crate::core::library::BookRecord;

/// Named form of the focus index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(usize),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field was empty at submission time.
    #[error("{label} can't be empty")]
    EmptyField { index: usize, label: String },
    /// Submission was attempted while a text field had focus.
    #[error("submit button is not focused")]
    SubmitNotFocused,
}

/// Text edits routed to whichever field has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Paste(String),
    DeleteBackward,
    DeleteForward,
    Cursor(CursorMove),
}

#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<InputField>,
    /// In `0..=fields.len()`; `fields.len()` is the submit button.
    focus_index: usize,
    /// Set by `blur_all()`, cleared by any focus change.
    blurred: bool,
}

/// Labels used when reporting a field that has no placeholder of its own.
const RECORD_LABELS: [&str; 2] = ["Title", "Author"];

impl FormState {
    /// Build a form over `fields` with slot 0 focused.
    ///
    /// An empty `fields` vector is given a single default field so the
    /// form always has at least one input.
    pub fn new(mut fields: Vec<InputField>) -> Self {
        if fields.is_empty() {
            fields.push(InputField::new(RECORD_LABELS[0], 32));
        }
        let mut form = Self {
            fields,
            focus_index: 0,
            blurred: false,
        };
        form.apply_focus();
        form
    }

    /// The two-field title/author form.
    pub fn book_form(
        title_placeholder: &str,
        title_max: usize,
        author_placeholder: &str,
        author_max: usize,
    ) -> Self {
        Self::new(vec![
            InputField::new(title_placeholder, title_max),
            InputField::new(author_placeholder, author_max),
        ])
    }

    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    /// Number of text fields (`N`); the submit button is not counted.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn focus_target(&self) -> FocusTarget {
        if self.focus_index == self.fields.len() {
            FocusTarget::Submit
        } else {
            FocusTarget::Field(self.focus_index)
        }
    }

    pub fn submit_focused(&self) -> bool {
        !self.blurred && self.focus_target() == FocusTarget::Submit
    }

    pub fn is_blurred(&self) -> bool {
        self.blurred
    }

    /// Current values in declaration order.
    pub fn values(&self) -> Vec<&str> {
        self.fields.iter().map(InputField::value).collect()
    }

    /// Move focus one slot, wrapping past either end.
    pub fn advance_focus(&mut self, direction: Direction) {
        let slots = self.fields.len() + 1;
        self.focus_index = match direction {
            Direction::Next => (self.focus_index + 1) % slots,
            Direction::Previous => (self.focus_index + slots - 1) % slots,
        };
        self.apply_focus();
        debug!("Form focus -> {:?}", self.focus_target());
    }

    pub fn focus_first(&mut self) {
        self.focus_index = 0;
        self.apply_focus();
    }

    /// Blur every field and the submit button. The focus index is kept.
    pub fn blur_all(&mut self) {
        for field in &mut self.fields {
            field.blur();
        }
        self.blurred = true;
    }

    /// Forward an edit to the focused field. Dropped when the submit
    /// button has focus or the form is blurred.
    ///
    /// Returns `true` if the field changed.
    pub fn edit(&mut self, edit: TextEdit) -> bool {
        if self.blurred {
            return false;
        }
        let FocusTarget::Field(index) = self.focus_target() else {
            return false;
        };
        let field = &mut self.fields[index];
        match edit {
            TextEdit::Insert(c) => field.insert_char(c),
            TextEdit::Paste(text) => field.insert_str(&text),
            TextEdit::DeleteBackward => field.delete_backward(),
            TextEdit::DeleteForward => field.delete_forward(),
            TextEdit::Cursor(movement) => field.move_cursor(movement),
        }
    }

    /// Turn the form into a [`BookRecord`].
    ///
    /// Field 0 becomes the title and field 1 the author. Every field must be
    /// non-empty, and a form with a single field fails on the missing author.
    /// On success all fields are cleared and focus returns to slot 0. On
    /// failure nothing changes.
    pub fn try_submit(&mut self) -> Result<BookRecord, ValidationError> {
        if !self.submit_focused() {
            return Err(ValidationError::SubmitNotFocused);
        }

        if let Some(index) = self.fields.iter().position(InputField::is_empty) {
            return Err(ValidationError::EmptyField {
                index,
                label: field_label(index),
            });
        }
        if self.fields.len() < RECORD_LABELS.len() {
            let index = self.fields.len();
            return Err(ValidationError::EmptyField {
                index,
                label: RECORD_LABELS[index].to_string(),
            });
        }

        let record = BookRecord::new(self.fields[0].value(), self.fields[1].value());
        for field in &mut self.fields {
            field.reset();
        }
        self.focus_first();
        Ok(record)
    }

    fn apply_focus(&mut self) {
        self.blurred = false;
        let focus_index = self.focus_index;
        for (i, field) in self.fields.iter_mut().enumerate() {
            if i == focus_index {
                field.focus();
            } else {
                field.blur();
            }
        }
    }
}

/// Fields are named by position; placeholders are sample input.
fn field_label(index: usize) -> String {
    RECORD_LABELS
        .get(index)
        .map(|label| label.to_string())
        .unwrap_or_else(|| format!("Field {}", index + 1))
}
