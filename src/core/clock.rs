//! Wall-clock access.

use chrono::{DateTime, Local};

/// Source of the current local time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The current local time.
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
