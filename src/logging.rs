//! Log setup.
//!
//! The TUI owns stdout, so log lines go to `zentro.log` in the data
//! directory. `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Paths;
use crate::error::ZentroError;

/// Filter directive for a configured level.
#[must_use]
pub fn directive(level: &str) -> String {
    format!("zentro={}", level.trim().to_lowercase())
}

/// Build the filter, preferring `RUST_LOG` when set.
#[must_use]
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)))
}

/// Install the global subscriber writing to the log file.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(paths: &Paths, level: &str) -> Result<(), ZentroError> {
    paths.ensure_dirs()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| ZentroError::Config(format!("Failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_scopes_to_crate() {
        assert_eq!(directive("debug"), "zentro=debug");
        assert_eq!(directive(" WARN "), "zentro=warn");
    }
}
