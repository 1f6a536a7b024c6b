//! Completed focus sessions.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Format of the human-readable `date` field.
pub const DATE_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// A finished focus session.
///
/// Serialized as `{date, duration, timestamp}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Local completion time, formatted with [`DATE_FORMAT`].
    pub date: String,
    /// Configured duration in minutes.
    pub duration: u32,
    /// Completion time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Session {
    /// Create a session that finished at `at`.
    #[must_use]
    pub fn new(duration: u32, at: DateTime<Local>) -> Self {
        Self {
            date: at.format(DATE_FORMAT).to_string(),
            duration,
            timestamp: at.timestamp_millis(),
        }
    }

    /// When the session finished.
    ///
    /// Reads the `date` field, falling back to `timestamp` if `date` does
    /// not parse.
    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Local>> {
        NaiveDateTime::parse_from_str(&self.date, DATE_FORMAT)
            .ok()
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
            .or_else(|| self.finished_at_timestamp())
    }

    /// Completion time from the epoch timestamp.
    #[must_use]
    pub fn finished_at_timestamp(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.timestamp).single()
    }
}
