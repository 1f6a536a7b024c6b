//! Command-line interface for zentro.

pub mod args;
pub mod commands;
