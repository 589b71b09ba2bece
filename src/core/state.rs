//! # Application State
//!
//! The navigation controller: which window is showing, the add-book form,
//! the library, and the advisory line shown under the form.
//!
//! ```text
//! NavigationController
//! ├── mode: Mode                   // AddForm | ListView
//! ├── form: FormState              // title/author inputs + submit
//! ├── library: LibraryStore        // books, newest first
//! ├── status: Option<StatusMessage> // last advisory message
//! └── running: bool                // false once Quit is handled
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use serde::Serialize;

use crate::core::config::ResolvedConfig;
use crate::core::form::FormState;
use crate::core::library::LibraryStore;
use crate::core::snapshot::{FieldView, Snapshot};

/// Which window receives navigation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Mode {
    #[default]
    AddForm,
    ListView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusKind {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }
}

pub struct NavigationController {
    pub(crate) mode: Mode,
    pub(crate) form: FormState,
    pub(crate) library: LibraryStore,
    pub(crate) status: Option<StatusMessage>,
    pub(crate) running: bool,
}

impl NavigationController {
    pub fn new(form: FormState, library: LibraryStore) -> Self {
        Self {
            mode: Mode::AddForm,
            form,
            library,
            status: None,
            running: true,
        }
    }

    /// Build the form and seeded library described by `config`.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let form = FormState::book_form(
            &config.title_placeholder,
            config.title_max_length,
            &config.author_placeholder,
            config.author_max_length,
        );
        Self::new(form, LibraryStore::with_records(config.books.clone()))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn library(&self) -> &LibraryStore {
        &self.library
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read-only view of everything a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            fields: self
                .form
                .fields()
                .iter()
                .map(|field| FieldView {
                    value: field.value().to_string(),
                    cursor: field.cursor(),
                    focused: field.is_focused(),
                    placeholder: field.placeholder().to_string(),
                })
                .collect(),
            submit_focused: self.form.submit_focused(),
            items: self.library.items().to_vec(),
            selection: self.library.selection(),
            status: self.status.clone(),
        }
    }
}
