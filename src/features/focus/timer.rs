//! Countdown state machine.
//!
//! [`TimerState::apply`] is pure: it takes an event and returns the next
//! state plus the side effects the caller must perform, in order.
//!
//! ```text
//! Idle -> Running -> Completed -> (reset) Idle
//!            |  ^
//!            v  | (start restarts from the configured duration)
//!          Paused -> (reset) Idle
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Duration used when the duration field is empty or invalid.
pub const DEFAULT_MINUTES: u32 = 25;

static LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?\d+)")
        .unwrap_or_else(|e| panic!("Invalid leading integer regex: {e}"))
});

/// Phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Ready to start; shows the configured duration.
    Idle,
    /// Counting down.
    Running,
    /// Stopped mid-countdown with the remainder kept on screen.
    Paused,
    /// Reached 0:00.
    Completed,
}

/// Events accepted by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Begin a countdown of `minutes`.
    Start {
        /// Duration read from the input at the time of the event.
        minutes: u32,
    },
    /// Stop counting, keeping the remainder.
    Pause,
    /// Stop and reload the duration from the input.
    Reset {
        /// Duration read from the input at the time of the event.
        minutes: u32,
    },
    /// One second elapsed.
    Tick,
    /// The duration input was committed.
    DurationChanged {
        /// The newly committed duration.
        minutes: u32,
    },
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm the 1-second tick source, replacing any armed one.
    StartTicker,
    /// Cancel the tick source.
    StopTicker,
    /// Show a completion message.
    ShowCompletion,
    /// Hide the completion message.
    HideCompletion,
    /// Append a finished session to history.
    RecordSession {
        /// Configured duration of the finished countdown.
        minutes: u32,
    },
}

/// Result of applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The next state.
    pub state: TimerState,
    /// Effects to perform, in order.
    pub effects: Vec<Effect>,
}

impl Transition {
    const fn unchanged(state: TimerState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    minutes: u32,
    seconds: u32,
    phase: TimerPhase,
    configured_minutes: u32,
}

impl TimerState {
    /// An idle timer showing `minutes:00`.
    #[must_use]
    pub const fn idle(minutes: u32) -> Self {
        Self {
            minutes,
            seconds: 0,
            phase: TimerPhase::Idle,
            configured_minutes: minutes,
        }
    }

    /// Minutes remaining.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds remaining within the current minute, in `0..=59`.
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Duration read by the last start, reset, or committed edit.
    #[must_use]
    pub const fn configured_minutes(&self) -> u32 {
        self.configured_minutes
    }

    /// Check if the timer is counting down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Check if the timer reached zero and has not been reset.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == TimerPhase::Completed
    }

    /// Format remaining time as `m:ss`.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format!("{}:{:02}", self.minutes, self.seconds)
    }

    /// Apply an event, returning the next state and its effects.
    #[must_use]
    pub fn apply(self, event: TimerEvent) -> Transition {
        match event {
            TimerEvent::Start { minutes } => self.start(minutes),
            TimerEvent::Pause => self.pause(),
            TimerEvent::Reset { minutes } => Self::reset(minutes),
            TimerEvent::Tick => self.tick(),
            TimerEvent::DurationChanged { minutes } => self.duration_changed(minutes),
        }
    }

    fn start(self, minutes: u32) -> Transition {
        if self.is_running() {
            return Transition::unchanged(self);
        }

        Transition {
            state: Self {
                minutes,
                seconds: 0,
                phase: TimerPhase::Running,
                configured_minutes: minutes,
            },
            effects: vec![Effect::HideCompletion, Effect::StartTicker],
        }
    }

    fn pause(self) -> Transition {
        if !self.is_running() {
            return Transition::unchanged(self);
        }

        Transition {
            state: Self {
                phase: TimerPhase::Paused,
                ..self
            },
            effects: vec![Effect::StopTicker],
        }
    }

    fn reset(minutes: u32) -> Transition {
        Transition {
            state: Self::idle(minutes),
            effects: vec![Effect::StopTicker, Effect::HideCompletion],
        }
    }

    fn tick(self) -> Transition {
        if !self.is_running() {
            return Transition::unchanged(self);
        }

        if self.seconds > 0 {
            return Transition::unchanged(Self {
                seconds: self.seconds - 1,
                ..self
            });
        }

        if self.minutes > 0 {
            return Transition::unchanged(Self {
                minutes: self.minutes - 1,
                seconds: 59,
                ..self
            });
        }

        Transition {
            state: Self {
                phase: TimerPhase::Completed,
                ..self
            },
            effects: vec![
                Effect::StopTicker,
                Effect::ShowCompletion,
                Effect::RecordSession {
                    minutes: self.configured_minutes,
                },
            ],
        }
    }

    fn duration_changed(self, minutes: u32) -> Transition {
        match self.phase {
            TimerPhase::Idle | TimerPhase::Paused => Transition::unchanged(Self::idle(minutes)),
            TimerPhase::Running | TimerPhase::Completed => Transition::unchanged(self),
        }
    }
}

/// Read a duration field the way a browser `parseInt` would.
///
/// Leading whitespace and a sign are accepted and trailing text is ignored.
/// Returns `None` unless the field yields a positive integer.
#[must_use]
pub fn try_parse_minutes(input: &str) -> Option<u32> {
    LEADING_INTEGER
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
}

/// [`try_parse_minutes`], falling back to `default`.
#[must_use]
pub fn parse_minutes(input: &str, default: u32) -> u32 {
    try_parse_minutes(input).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(minutes: u32, seconds: u32) -> TimerState {
        TimerState {
            minutes,
            seconds,
            phase: TimerPhase::Running,
            configured_minutes: 25,
        }
    }

    #[test]
    fn test_idle_display() {
        let state = TimerState::idle(25);
        assert_eq!(state.format_remaining(), "25:00");
        assert_eq!(state.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_start_shows_full_duration() {
        for d in [1, 5, 25, 90, 600] {
            let t = TimerState::idle(25).apply(TimerEvent::Start { minutes: d });
            assert_eq!(t.state.format_remaining(), format!("{d}:00"));
            assert!(t.state.is_running());
            assert_eq!(t.effects, vec![Effect::HideCompletion, Effect::StartTicker]);
        }
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let state = running(3, 12);
        let t = state.apply(TimerEvent::Start { minutes: 50 });
        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_tick_decrements_seconds() {
        let t = running(3, 12).apply(TimerEvent::Tick);
        assert_eq!((t.state.minutes(), t.state.seconds()), (3, 11));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_tick_borrows_minute() {
        let t = running(3, 0).apply(TimerEvent::Tick);
        assert_eq!((t.state.minutes(), t.state.seconds()), (2, 59));

        let t = running(0, 1).apply(TimerEvent::Tick);
        assert_eq!((t.state.minutes(), t.state.seconds()), (0, 0));
        assert!(t.state.is_running());
    }

    #[test]
    fn test_tick_at_zero_completes() {
        let mut state = running(0, 0);
        state.configured_minutes = 7;

        let t = state.apply(TimerEvent::Tick);

        assert!(t.state.is_completed());
        assert!(!t.state.is_running());
        assert_eq!(
            t.effects,
            vec![
                Effect::StopTicker,
                Effect::ShowCompletion,
                Effect::RecordSession { minutes: 7 },
            ]
        );
    }

    #[test]
    fn test_full_countdown_records_once() {
        let mut state = TimerState::idle(25)
            .apply(TimerEvent::Start { minutes: 1 })
            .state;
        let mut records = 0;

        for _ in 0..61 {
            let t = state.apply(TimerEvent::Tick);
            records += t
                .effects
                .iter()
                .filter(|e| matches!(e, Effect::RecordSession { minutes: 1 }))
                .count();
            state = t.state;
        }

        assert!(state.is_completed());
        assert_eq!(records, 1);

        // Further ticks after completion do nothing
        let t = state.apply(TimerEvent::Tick);
        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_tick_ignored_when_not_running() {
        let idle = TimerState::idle(5);
        assert_eq!(idle.apply(TimerEvent::Tick).state, idle);
    }

    #[test]
    fn test_pause_keeps_remainder() {
        let t = running(12, 34).apply(TimerEvent::Pause);
        assert_eq!(t.state.phase(), TimerPhase::Paused);
        assert_eq!(t.state.format_remaining(), "12:34");
        assert_eq!(t.effects, vec![Effect::StopTicker]);
    }

    #[test]
    fn test_pause_when_not_running_is_noop() {
        let idle = TimerState::idle(5);
        let t = idle.apply(TimerEvent::Pause);
        assert_eq!(t.state, idle);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_pause_then_reset_reloads_input() {
        let paused = running(12, 34).apply(TimerEvent::Pause).state;
        let t = paused.apply(TimerEvent::Reset { minutes: 30 });

        assert_eq!(t.state, TimerState::idle(30));
        assert_eq!(t.effects, vec![Effect::StopTicker, Effect::HideCompletion]);
    }

    #[test]
    fn test_start_after_pause_restarts() {
        let paused = running(12, 34).apply(TimerEvent::Pause).state;
        let t = paused.apply(TimerEvent::Start { minutes: 25 });
        assert_eq!(t.state.format_remaining(), "25:00");
        assert!(t.state.is_running());
    }

    #[test]
    fn test_reset_from_completed() {
        let completed = running(0, 0).apply(TimerEvent::Tick).state;
        let t = completed.apply(TimerEvent::Reset { minutes: 25 });
        assert_eq!(t.state.phase(), TimerPhase::Idle);
        assert!(!t.state.is_completed());
    }

    #[test]
    fn test_duration_change_honored_when_idle_or_paused() {
        let t = TimerState::idle(25).apply(TimerEvent::DurationChanged { minutes: 40 });
        assert_eq!(t.state, TimerState::idle(40));

        let paused = running(3, 3).apply(TimerEvent::Pause).state;
        let t = paused.apply(TimerEvent::DurationChanged { minutes: 40 });
        assert_eq!(t.state, TimerState::idle(40));
    }

    #[test]
    fn test_duration_change_ignored_when_running_or_completed() {
        let state = running(3, 3);
        assert_eq!(
            state.apply(TimerEvent::DurationChanged { minutes: 40 }).state,
            state
        );

        let completed = running(0, 0).apply(TimerEvent::Tick).state;
        assert_eq!(
            completed
                .apply(TimerEvent::DurationChanged { minutes: 40 })
                .state,
            completed
        );
    }

    #[test]
    fn test_parse_minutes_valid() {
        assert_eq!(parse_minutes("25", DEFAULT_MINUTES), 25);
        assert_eq!(parse_minutes("  7", DEFAULT_MINUTES), 7);
        assert_eq!(parse_minutes("+3", DEFAULT_MINUTES), 3);
        assert_eq!(parse_minutes("12abc", DEFAULT_MINUTES), 12);
    }

    #[test]
    fn test_try_parse_minutes_reports_fallback() {
        assert_eq!(try_parse_minutes("12abc"), Some(12));
        assert_eq!(try_parse_minutes(" 40 "), Some(40));
        assert_eq!(try_parse_minutes("0"), None);
        assert_eq!(try_parse_minutes("abc"), None);
        assert_eq!(try_parse_minutes(""), None);
    }

    #[test]
    fn test_parse_minutes_falls_back() {
        assert_eq!(parse_minutes("", DEFAULT_MINUTES), 25);
        assert_eq!(parse_minutes("abc", DEFAULT_MINUTES), 25);
        assert_eq!(parse_minutes("0", DEFAULT_MINUTES), 25);
        assert_eq!(parse_minutes("-5", DEFAULT_MINUTES), 25);
        assert_eq!(parse_minutes("99999999999", DEFAULT_MINUTES), 25);
        assert_eq!(parse_minutes("", 50), 50);
    }
}
