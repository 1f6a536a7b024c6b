//! Focus timer controller.
//!
//! Feeds user commands and ticks into the countdown state machine, then
//! carries out the effects it returns: arming the ticker, picking a
//! completion message, and saving finished sessions.

use std::time::Instant;

use tracing::{debug, error, info};

use super::quotes::{self, QuotePicker};
use super::session::Session;
use super::storage::HistoryStore;
use super::ticker::Ticker;
use super::timer::{parse_minutes, Effect, TimerEvent, TimerState, DEFAULT_MINUTES};
use super::view::View;
use crate::core::Clock;
use crate::storage::KeyValueStore;

/// User-initiated commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a countdown from the duration field.
    Start,
    /// Pause a running countdown.
    Pause,
    /// Stop and reload the duration field.
    Reset,
    /// Commit the duration field (the field's change event).
    CommitDuration,
}

/// Drives one focus timer.
pub struct FocusController<S> {
    state: TimerState,
    duration_input: String,
    default_minutes: u32,
    ticker: Ticker,
    history: HistoryStore<S>,
    sessions: Vec<Session>,
    completion: Option<&'static str>,
    notice: Option<String>,
    clock: Box<dyn Clock>,
    picker: Box<dyn QuotePicker>,
}

impl<S: KeyValueStore> FocusController<S> {
    /// Create a controller with the duration field set to `duration_input`.
    pub fn new(
        history: HistoryStore<S>,
        duration_input: impl Into<String>,
        clock: Box<dyn Clock>,
        picker: Box<dyn QuotePicker>,
    ) -> Self {
        let duration_input = duration_input.into();
        let default_minutes = DEFAULT_MINUTES;
        let sessions = history.load();

        Self {
            state: TimerState::idle(parse_minutes(&duration_input, default_minutes)),
            duration_input,
            default_minutes,
            ticker: Ticker::every_second(),
            history,
            sessions,
            completion: None,
            notice: None,
            clock,
            picker,
        }
    }

    /// Use `minutes` when the duration field is empty or invalid.
    #[must_use]
    pub fn with_default_minutes(mut self, minutes: u32) -> Self {
        self.default_minutes = minutes.max(1);
        self.state = TimerState::idle(self.configured_minutes());
        self
    }

    /// Current countdown state.
    pub const fn state(&self) -> &TimerState {
        &self.state
    }

    /// Sessions as last loaded, newest first.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Current duration field text.
    pub fn duration_input(&self) -> &str {
        &self.duration_input
    }

    /// Last persistence problem, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Check if the tick source is armed.
    pub const fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Time until the next tick is due, if running.
    pub fn until_next_tick(&self, now: Instant) -> Option<std::time::Duration> {
        self.ticker.until_next(now)
    }

    /// Replace the duration field text.
    ///
    /// Returns `false` and leaves the field alone while the field is
    /// disabled (the countdown is running).
    pub fn set_duration_input(&mut self, text: impl Into<String>) -> bool {
        if self.state.is_running() {
            return false;
        }
        self.duration_input = text.into();
        true
    }

    /// Duration the field currently parses to.
    pub fn configured_minutes(&self) -> u32 {
        parse_minutes(&self.duration_input, self.default_minutes)
    }

    /// Handle a user command at `now`.
    pub fn dispatch(&mut self, command: Command, now: Instant) {
        let minutes = self.configured_minutes();
        let event = match command {
            Command::Start => TimerEvent::Start { minutes },
            Command::Pause => TimerEvent::Pause,
            Command::Reset => TimerEvent::Reset { minutes },
            Command::CommitDuration => TimerEvent::DurationChanged { minutes },
        };
        debug!(?command, minutes, "dispatching command");
        self.apply(event, now);
    }

    /// Apply every tick that has come due by `now`.
    ///
    /// Returns the number of ticks applied.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let due = self.ticker.due(now);
        let mut applied = 0;
        for _ in 0..due {
            if !self.ticker.is_active() {
                break;
            }
            self.apply(TimerEvent::Tick, now);
            applied += 1;
        }
        applied
    }

    /// Build the current view.
    pub fn view(&self) -> View {
        View::build(
            &self.state,
            &self.duration_input,
            self.completion,
            &self.sessions,
            self.clock.now(),
        )
    }

    fn apply(&mut self, event: TimerEvent, now: Instant) {
        let transition = self.state.apply(event);
        if transition.state.phase() != self.state.phase() {
            debug!(from = ?self.state.phase(), to = ?transition.state.phase(), "timer phase changed");
        }
        self.state = transition.state;

        for effect in transition.effects {
            self.perform(effect, now);
        }
    }

    fn perform(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::StartTicker => self.ticker.start(now),
            Effect::StopTicker => self.ticker.cancel(),
            Effect::ShowCompletion => {
                self.completion = Some(quotes::choose(self.picker.as_mut()));
            }
            Effect::HideCompletion => self.completion = None,
            Effect::RecordSession { minutes } => self.record_session(minutes),
        }
    }

    fn record_session(&mut self, minutes: u32) {
        let session = Session::new(minutes, self.clock.now());
        match self.history.record(session) {
            Ok(sessions) => {
                info!(minutes, "focus session completed");
                self.sessions = sessions;
                self.notice = None;
            }
            Err(e) => {
                error!(error = %e, "failed to save focus session");
                self.notice = Some(format!("Could not save session: {e}"));
            }
        }
    }
}
