//! Terminal event decoding: crossterm events in, core `Action`s out.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// Poll for an action, blocking up to `timeout`.
///
/// Returns `Ok(None)` on timeout or for events that map to nothing.
pub fn poll_action(timeout: Duration) -> io::Result<Option<Action>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = event::read()?;
    Ok(map_event(event))
}

/// Translate one terminal event. Key releases are ignored.
pub fn map_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        Event::Paste(text) => Some(Action::TextPaste(text)),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<Action> {
    log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('a')) => Some(Action::SwitchToAdd),
        (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(Action::SwitchToList),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(Action::Delete),
        (_, KeyCode::Esc) => Some(Action::Quit),
        (_, KeyCode::Tab) | (_, KeyCode::Down) => Some(Action::Next),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => Some(Action::Previous),
        (_, KeyCode::Enter) => Some(Action::Confirm),
        (_, KeyCode::Backspace) => Some(Action::TextDeleteBackward),
        (_, KeyCode::Delete) => Some(Action::TextDeleteForward),
        (_, KeyCode::Left) => Some(Action::CursorLeft),
        (_, KeyCode::Right) => Some(Action::CursorRight),
        (_, KeyCode::Home) => Some(Action::CursorHome),
        (_, KeyCode::End) => Some(Action::CursorEnd),
        (modifiers, KeyCode::Char(c))
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::TextInsert(c))
        }
        _ => None,
    }
}
