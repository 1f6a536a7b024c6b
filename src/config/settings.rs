//! Configuration settings for zentro.
//!
//! Settings are loaded from `~/.zentro/config.yaml`.

use serde::Deserialize;

use crate::error::ZentroError;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Countdown settings.
    pub timer: TimerConfig,
    /// Session history settings.
    pub history: HistoryConfig,
}

/// General application settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Log level written to the log file (`RUST_LOG` takes precedence).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate's global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Countdown settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Duration used when the duration field is empty or invalid.
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
}

/// Session history settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of sessions kept, newest first. Capped at 10.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

// Default value functions for serde
const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_minutes() -> u32 {
    25
}

const fn default_max_sessions() -> usize {
    10
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ZentroError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ZentroError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            ZentroError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ZentroError> {
        if self.timer.default_minutes == 0 {
            return Err(ZentroError::Config(
                "timer.default_minutes must be at least 1".to_string(),
            ));
        }
        if self.history.max_sessions == 0 {
            return Err(ZentroError::Config(
                "history.max_sessions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
