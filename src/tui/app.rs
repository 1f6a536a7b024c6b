//! Application state for the TUI.

use std::time::Instant;

use crate::features::focus::{Command, FocusController, View};
use crate::storage::KeyValueStore;

/// Longest accepted minutes field.
const MAX_INPUT_LEN: usize = 4;

/// Key hint shown in the status bar.
pub const KEY_HINT: &str = "s:start | p:pause | r:reset | 0-9:minutes | Enter:apply | ?:help | q:quit";

/// Application state.
pub struct App<S> {
    /// The focus timer.
    pub controller: FocusController<S>,
    /// Status bar message.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new app instance.
    pub const fn new(controller: FocusController<S>) -> Self {
        Self {
            controller,
            status: None,
            should_quit: false,
        }
    }

    /// Current view of the timer.
    pub fn view(&self) -> View {
        self.controller.view()
    }

    /// Run a timer command.
    pub fn command(&mut self, command: Command, now: Instant) {
        self.controller.dispatch(command, now);
        self.status = None;
    }

    /// Append a digit to the minutes field.
    pub fn push_digit(&mut self, digit: char) {
        let mut text = self.controller.duration_input().to_string();
        if !digit.is_ascii_digit() || text.len() >= MAX_INPUT_LEN {
            return;
        }
        text.push(digit);
        self.set_input(text);
    }

    /// Remove the last character of the minutes field.
    pub fn backspace(&mut self) {
        let mut text = self.controller.duration_input().to_string();
        if text.pop().is_some() {
            self.set_input(text);
        }
    }

    fn set_input(&mut self, text: String) {
        if !self.controller.set_duration_input(text) {
            self.status = Some("Minutes can't change while the timer is running".to_string());
        }
    }

    /// Advance the timer to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.controller.poll(now);
    }

    /// Show the key help.
    pub fn show_help(&mut self) {
        self.status = Some(KEY_HINT.to_string());
    }
}
