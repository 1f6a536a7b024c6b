//! Command implementations for zentro.
//!
//! The interactive timer lives in [`crate::tui`]; these are the one-shot
//! commands that read or reset the stored history.

mod focus;
mod shell;

pub use focus::{clear, history, stats};
pub use shell::completions;
