//! Error types for zentro.

use thiserror::Error;

/// Errors that can occur while running zentro.
#[derive(Error, Debug)]
pub enum ZentroError {
    /// Configuration could not be loaded, saved, or resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The local session store failed.
    #[error("Database error: {0}")]
    Database(String),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization or parsing failed.
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for ZentroError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

impl ZentroError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Database(_) | Self::Io(_) => 3,
            Self::Terminal(_) | Self::Parse(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = ZentroError::Database("disk full".to_string());
        assert_eq!(err.to_string(), "Database error: disk full");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let err: ZentroError = json_err.into();
        assert!(matches!(err, ZentroError::Parse(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_exit_code() {
        assert_eq!(ZentroError::Config("bad".to_string()).exit_code(), 2);
    }
}
