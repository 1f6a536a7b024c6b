//! Presentation model.
//!
//! Everything a front end needs to draw, computed purely from the timer
//! state, the history, and the current time.

use chrono::{DateTime, Local};

use super::report::{date_label, format_weekly, weekly_count};
use super::session::Session;
use super::timer::{TimerPhase, TimerState};

/// Placeholder shown when there is no history.
pub const EMPTY_HISTORY: &str = "No sessions yet. Start your first focus session!";

/// Which controls accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Start control enabled.
    pub start: bool,
    /// Pause control enabled.
    pub pause: bool,
    /// Duration field editable.
    pub duration_input: bool,
}

/// One rendered history line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLine {
    /// Relative date label.
    pub label: String,
    /// Duration text, e.g. `25 min`.
    pub duration: String,
}

/// Rendered history panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    /// No sessions recorded.
    Empty,
    /// Sessions, newest first.
    Entries(Vec<HistoryLine>),
}

/// Full screen contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Remaining time, `m:ss`.
    pub display: String,
    /// Status line.
    pub status: &'static str,
    /// Whether the countdown is active (for highlighting).
    pub running: bool,
    /// Control availability.
    pub controls: Controls,
    /// Current duration field text.
    pub duration_input: String,
    /// Completion message, when shown.
    pub completion: Option<&'static str>,
    /// History panel.
    pub history: HistoryView,
    /// Weekly statistic line.
    pub weekly: String,
}

/// Status line for a state.
#[must_use]
pub const fn status_line(state: &TimerState) -> &'static str {
    match state.phase() {
        TimerPhase::Running => "Focus time in progress...",
        TimerPhase::Completed => "Session completed!",
        TimerPhase::Idle | TimerPhase::Paused => "Ready to focus",
    }
}

/// Control availability for a state.
#[must_use]
pub fn controls(state: &TimerState) -> Controls {
    let running = state.is_running();
    Controls {
        start: !running,
        pause: running,
        duration_input: !running,
    }
}

/// Render the history panel.
#[must_use]
pub fn history_view(history: &[Session], now: DateTime<Local>) -> HistoryView {
    if history.is_empty() {
        return HistoryView::Empty;
    }

    HistoryView::Entries(
        history
            .iter()
            .map(|s| HistoryLine {
                label: date_label(s, now),
                duration: format!("{} min", s.duration),
            })
            .collect(),
    )
}

impl View {
    /// Build the view for the given inputs.
    #[must_use]
    pub fn build(
        state: &TimerState,
        duration_input: &str,
        completion: Option<&'static str>,
        history: &[Session],
        now: DateTime<Local>,
    ) -> Self {
        Self {
            display: state.format_remaining(),
            status: status_line(state),
            running: state.is_running(),
            controls: controls(state),
            duration_input: duration_input.to_string(),
            completion,
            history: history_view(history, now),
            weekly: format_weekly(weekly_count(history, now)),
        }
    }
}
