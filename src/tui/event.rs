//! Event handling for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::ZentroError;
use crate::features::focus::Command;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Longest time to block waiting for input.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Run a timer command.
    Timer(Command),
}

/// Wait briefly for a terminal event and handle it.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<S: KeyValueStore>(app: &mut App<S>) -> Result<Option<Action>, ZentroError> {
    let timeout = app
        .controller
        .until_next_tick(Instant::now())
        .map_or(POLL_INTERVAL, |d| d.min(POLL_INTERVAL));

    if event::poll(timeout).map_err(|e| ZentroError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| ZentroError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(handle_key(app, key));
        }
    }

    Ok(None)
}

/// Map a key press to an action, editing the minutes field in place.
pub fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        KeyCode::Char('s') | KeyCode::Char(' ') => Some(Action::Timer(Command::Start)),
        KeyCode::Char('p') => Some(Action::Timer(Command::Pause)),
        KeyCode::Char('r') => Some(Action::Timer(Command::Reset)),
        KeyCode::Enter => Some(Action::Timer(Command::CommitDuration)),

        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.push_digit(c);
            None
        }
        KeyCode::Backspace => {
            app.backspace();
            None
        }

        KeyCode::Char('?') => {
            app.show_help();
            None
        }

        _ => None,
    }
}
