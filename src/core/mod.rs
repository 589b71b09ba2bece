//! # Core Application Logic
//!
//! This module contains Shelf's navigation engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (controller)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Snapshot (view data) │
//!                    │                         │
//!                    │  No UI. Single thread.  │
//!                    └───────────┬─────────────┘
//!                                │ Frontend trait
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`input_field`]: one editable text field
//! - [`form`]: the add-book form, focus cycling and submission
//! - [`library`]: the book list and its selection
//! - [`state`]: the `NavigationController` tying form and library together
//! - [`action`]: the `Action` enum and the `update()` transition function
//! - [`snapshot`]: what a renderer gets to see
//! - [`event_loop`]: the `Frontend` seam and the loop that drives it
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod event_loop;
pub mod form;
pub mod input_field;
pub mod library;
pub mod snapshot;
pub mod state;
