//! Read-only view of the model handed to renderers after every action.
//!
//! Owns its data so a frontend can hold it across a draw call (or dump it
//! as JSON) without borrowing the controller.

use serde::Serialize;

use crate::core::library::BookRecord;
use crate::core::state::{Mode, StatusMessage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub value: String,
    /// Cursor column in chars.
    pub cursor: usize,
    pub focused: bool,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub fields: Vec<FieldView>,
    pub submit_focused: bool,
    pub items: Vec<BookRecord>,
    pub selection: Option<usize>,
    pub status: Option<StatusMessage>,
}

impl Snapshot {
    /// The focused field and its index, if a text field has focus.
    pub fn focused_field(&self) -> Option<(usize, &FieldView)> {
        self.fields.iter().enumerate().find(|(_, f)| f.focused)
    }
}
