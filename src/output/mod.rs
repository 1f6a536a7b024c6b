//! Output formatting for zentro.
//!
//! This module provides formatters for displaying session history in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::ZentroError;
use crate::features::focus::report::HistoryReport;

pub use json::*;
pub use pretty::*;

/// Format session history based on output format
///
/// # Errors
///
/// Returns `ZentroError::Parse` if JSON serialization fails.
pub fn format_history(report: &HistoryReport, format: OutputFormat) -> Result<String, ZentroError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(report)),
        OutputFormat::Json => format_history_json(report),
    }
}

/// Format the weekly statistic based on output format
///
/// # Errors
///
/// Returns `ZentroError::Parse` if JSON serialization fails.
pub fn format_stats(report: &HistoryReport, format: OutputFormat) -> Result<String, ZentroError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(report)),
        OutputFormat::Json => format_stats_json(report),
    }
}
