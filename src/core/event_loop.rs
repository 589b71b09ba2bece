//! # Event Loop
//!
//! The single-threaded driver between a frontend and the controller.
//!
//! ```text
//! Frontend::next_action() ──▶ update() ──▶ Frontend::render(snapshot)
//!          ▲                                          │
//!          └──────────────────────────────────────────┘
//! ```
//!
//! One action is fully applied and rendered before the next is read.
//! `Effect::Quit` ends the loop at once; nothing after it is processed.

use std::io;

use log::{debug, info};

use crate::core::action::{Action, Effect, update};
use crate::core::snapshot::Snapshot;
use crate::core::state::NavigationController;

/// The input source and render target the loop talks to.
pub trait Frontend {
    /// Next action, or `Ok(None)` if nothing arrived yet (poll timeout).
    fn next_action(&mut self) -> io::Result<Option<Action>>;

    /// Draw the given state.
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

/// Drive `app` until a Quit action is handled. Returns the number of
/// actions processed, Quit included.
pub fn run<F: Frontend>(app: &mut NavigationController, frontend: &mut F) -> io::Result<usize> {
    frontend.render(&app.snapshot())?;

    let mut processed = 0;
    while app.is_running() {
        let Some(action) = frontend.next_action()? else {
            continue;
        };
        processed += 1;
        match update(app, action) {
            Effect::Render => frontend.render(&app.snapshot())?,
            Effect::Quit => break,
        }
    }

    info!("Event loop finished after {} actions", processed);
    debug!("Final library size: {}", app.library().len());
    Ok(processed)
}
