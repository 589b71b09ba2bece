//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `AddForm`: the add-book form and submit button
//! - `StatusLine`: the last advisory message
//! - `Footer`: key bindings
//!
//! ### Stateful Wrappers
//!
//! - `LibraryList`: borrows a persistent `ListState` from `TuiState` so the
//!   scroll offset survives between frames
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (fields borrowed from the
//! core `Snapshot` plus a `Theme`), never by reaching into the controller.
//! Styles are props too; there is no global style state.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── add_form.rs      (AddForm window)
//! ├── library_list.rs  (ListView window + DisplayRow projection)
//! └── status_line.rs   (StatusLine + Footer)
//! ```

pub mod add_form;
pub mod library_list;
pub mod status_line;

pub use add_form::AddForm;
pub use library_list::{DisplayRow, LibraryList, display_row};
pub use status_line::{Footer, StatusLine};
