use colored::Colorize;

use crate::features::focus::report::HistoryReport;
use crate::features::focus::view::EMPTY_HISTORY;

/// Format session history as a pretty list
pub fn format_history_pretty(report: &HistoryReport) -> String {
    if report.sessions.is_empty() {
        return format!(
            "{}\n  {}\n\n{}",
            "Recent Sessions".bold(),
            EMPTY_HISTORY.dimmed(),
            report.weekly_summary
        );
    }

    let mut output = format!("{} ({})\n", "Recent Sessions".bold(), report.sessions.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for entry in &report.sessions {
        output.push_str(&format!(
            "{:<28} {}\n",
            entry.label,
            format!("{} min", entry.duration).cyan()
        ));
    }

    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!("{}", report.weekly_summary.green()));

    output
}

/// Format the weekly statistic as pretty output
pub fn format_stats_pretty(report: &HistoryReport) -> String {
    let mut output = format!("{}\n", report.weekly_summary.bold());
    output.push_str(&format!(
        "  {} minutes across the last {} logged sessions",
        report.total_minutes,
        report.sessions.len()
    ));
    output
}
