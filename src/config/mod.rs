//! Configuration management for zentro.
//!
//! This module handles loading and saving configuration from `~/.zentro/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, HistoryConfig, TimerConfig};
