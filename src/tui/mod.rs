//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders snapshots,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. It plugs
//! into the core through the `Frontend` trait; the core's event loop decides
//! when to read input and when to draw.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws after an action was applied.
//! Idle polls time out every 250ms without touching the terminal.

mod component;
pub mod components;
pub mod event;
pub mod theme;
mod ui;

use log::info;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::widgets::ListState;

use crate::core::action::Action;
use crate::core::event_loop::{self, Frontend};
use crate::core::snapshot::Snapshot;
use crate::core::state::NavigationController;
use crate::tui::event::poll_action;
use crate::tui::theme::Theme;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of the core model)
pub struct TuiState {
    pub library_list: ListState,
    pub theme: Theme,
}

impl TuiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            library_list: ListState::default(),
            theme,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// `Frontend` backed by the real terminal.
struct TerminalFrontend {
    terminal: DefaultTerminal,
    tui: TuiState,
}

impl Frontend for TerminalFrontend {
    fn next_action(&mut self) -> io::Result<Option<Action>> {
        poll_action(POLL_TIMEOUT)
    }

    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let tui = &mut self.tui;
        self.terminal.draw(|f| ui::draw_ui(f, snapshot, tui))?;
        Ok(())
    }
}

/// Take over the terminal and run `app` until the user quits.
///
/// The terminal is restored before returning, including on error.
pub fn run(app: &mut NavigationController, theme: Theme) -> io::Result<()> {
    let terminal = ratatui::init();

    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut frontend = TerminalFrontend {
            terminal,
            tui: TuiState::new(theme),
        };
        event_loop::run(app, &mut frontend)
    });

    ratatui::restore();
    result.map(|processed| info!("TUI closed after {} actions", processed))
}
