//! Repeating tick source.
//!
//! There is no background thread. The owner polls [`Ticker::due`] from its
//! event loop and applies one tick per elapsed period.

use std::time::{Duration, Instant};

/// A cancellable repeating deadline.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    /// Create a stopped ticker with the given period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Create a stopped one-second ticker.
    #[must_use]
    pub const fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Arm the ticker so the first tick is due one period after `now`.
    ///
    /// Any previously armed schedule is replaced.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    /// Stop the ticker. Cancelling a stopped ticker is a no-op.
    pub fn cancel(&mut self) {
        self.next = None;
    }

    /// Check if the ticker is armed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.next.is_some()
    }

    /// Number of whole periods elapsed since the last poll.
    ///
    /// Advances the deadline past `now`. A stopped ticker always returns 0.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next else {
            return 0;
        };

        if now < next {
            return 0;
        }

        let period = self.period.as_nanos().max(1);
        let behind = now.duration_since(next).as_nanos() / period;
        let count = u32::try_from(behind.saturating_add(1)).unwrap_or(u32::MAX);

        self.next = Some(next + self.period * count);
        count
    }

    /// Time until the next tick, if armed.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }
}
