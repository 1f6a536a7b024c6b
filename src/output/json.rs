//! JSON output formatting for zentro.

use serde_json::json;

use crate::error::ZentroError;
use crate::features::focus::report::HistoryReport;

/// Format session history as JSON
///
/// # Errors
///
/// Returns `ZentroError::Parse` if JSON serialization fails.
pub fn format_history_json(report: &HistoryReport) -> Result<String, ZentroError> {
    let output = json!({
        "count": report.sessions.len(),
        "weekly_count": report.weekly_count,
        "items": report.sessions,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the weekly statistic as JSON
///
/// # Errors
///
/// Returns `ZentroError::Parse` if JSON serialization fails.
pub fn format_stats_json(report: &HistoryReport) -> Result<String, ZentroError> {
    let output = json!({
        "weekly_count": report.weekly_count,
        "summary": report.weekly_summary,
        "total_minutes": report.total_minutes,
        "logged_sessions": report.sessions.len(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::session::Session;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_history_json_empty() {
        let now = Local::now();
        let report = HistoryReport::generate(&[], now);
        let result = format_history_json(&report).unwrap();

        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"weekly_count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_history_json_items() {
        let now = Local
            .with_ymd_and_hms(2026, 10, 19, 15, 4, 0)
            .earliest()
            .unwrap();
        let report = HistoryReport::generate(&[Session::new(30, now)], now);
        let result = format_history_json(&report).unwrap();

        assert!(result.contains("\"label\": \"Today, 03:04 PM\""));
        assert!(result.contains("\"duration\": 30"));
        assert!(result.contains("\"date\": \"10/19/2026, 03:04:00 PM\""));
    }

    #[test]
    fn test_stats_json() {
        let report = HistoryReport::generate(&[], Local::now());
        let result = format_stats_json(&report).unwrap();

        assert!(result.contains("\"summary\": \"0 sessions completed this week\""));
    }
}
