//! Weekly statistics and history labels.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::session::Session;

/// Milliseconds in one day.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Length of the rolling weekly window in milliseconds.
pub const WEEK_MS: i64 = 7 * DAY_MS;

/// Number of sessions with a timestamp strictly inside the last 7 days.
#[must_use]
pub fn weekly_count(history: &[Session], now: DateTime<Local>) -> usize {
    let week_ago = now.timestamp_millis() - WEEK_MS;
    history.iter().filter(|s| s.timestamp > week_ago).count()
}

/// Render the weekly statistic line.
#[must_use]
pub fn format_weekly(count: usize) -> String {
    format!("{count} sessions completed this week")
}

/// Whole days between two instants, rounded up.
#[must_use]
pub fn day_difference(then: DateTime<Local>, now: DateTime<Local>) -> i64 {
    let diff = (now.timestamp_millis() - then.timestamp_millis()).abs();
    (diff + DAY_MS - 1) / DAY_MS
}

/// Relative label for when a session finished.
///
/// - within one day: `Today, 03:04 PM`
/// - two days: `Yesterday, 03:04 PM`
/// - otherwise: `Oct 5, 03:04 PM`
#[must_use]
pub fn date_label(session: &Session, now: DateTime<Local>) -> String {
    let Some(then) = session.finished_at() else {
        return session.date.clone();
    };

    let time = then.format("%I:%M %p");
    match day_difference(then, now) {
        0 | 1 => format!("Today, {time}"),
        2 => format!("Yesterday, {time}"),
        _ => then.format("%b %-d, %I:%M %p").to_string(),
    }
}

/// A labelled history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Relative date label.
    pub label: String,
    /// Configured duration in minutes.
    pub duration: u32,
    /// Stored display date.
    pub date: String,
    /// Stored epoch-millisecond timestamp.
    pub timestamp: i64,
}

/// History with derived statistics.
#[derive(Debug, Clone)]
pub struct HistoryReport {
    /// Sessions in the last 7 days.
    pub weekly_count: usize,
    /// Rendered weekly statistic.
    pub weekly_summary: String,
    /// Total minutes across the listed sessions.
    pub total_minutes: u64,
    /// Entries, newest first.
    pub sessions: Vec<HistoryEntry>,
}

impl HistoryReport {
    /// Build a report from a newest-first history.
    #[must_use]
    pub fn generate(history: &[Session], now: DateTime<Local>) -> Self {
        let count = weekly_count(history, now);
        let sessions: Vec<HistoryEntry> = history
            .iter()
            .map(|s| HistoryEntry {
                label: date_label(s, now),
                duration: s.duration,
                date: s.date.clone(),
                timestamp: s.timestamp,
            })
            .collect();

        Self {
            weekly_count: count,
            weekly_summary: format_weekly(count),
            total_minutes: history.iter().map(|s| u64::from(s.duration)).sum(),
            sessions,
        }
    }

    /// Keep only the newest `limit` entries.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.sessions.truncate(limit);
        self
    }
}
