//! Session history command implementations.

use chrono::{DateTime, Local};
use colored::Colorize;
use tracing::info;

use crate::cli::args::OutputFormat;
use crate::error::ZentroError;
use crate::features::focus::{HistoryReport, HistoryStore};
use crate::output::{format_history, format_stats};
use crate::storage::KeyValueStore;

/// List recent sessions.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn history<S: KeyValueStore>(
    store: &HistoryStore<S>,
    limit: Option<usize>,
    now: DateTime<Local>,
    format: OutputFormat,
) -> Result<String, ZentroError> {
    let mut report = HistoryReport::generate(&store.load(), now);
    if let Some(limit) = limit {
        report = report.limit(limit);
    }
    format_history(&report, format)
}

/// Show the weekly statistic.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn stats<S: KeyValueStore>(
    store: &HistoryStore<S>,
    now: DateTime<Local>,
    format: OutputFormat,
) -> Result<String, ZentroError> {
    let report = HistoryReport::generate(&store.load(), now);
    format_stats(&report, format)
}

/// Delete all sessions.
///
/// # Errors
///
/// Returns an error if `force` is not set or the store cannot be written.
pub fn clear<S: KeyValueStore>(
    store: &mut HistoryStore<S>,
    force: bool,
    format: OutputFormat,
) -> Result<String, ZentroError> {
    if !force {
        return Err(ZentroError::Config(
            "This will delete all focus session history.\nUse --force to confirm.".to_string(),
        ));
    }

    store.clear()?;
    info!("session history cleared");

    match format {
        OutputFormat::Json => Ok(r#"{"cleared": true}"#.to_string()),
        OutputFormat::Pretty => Ok("Focus session history cleared.".green().to_string()),
    }
}
