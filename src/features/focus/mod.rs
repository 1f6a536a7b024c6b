//! Focus timer and session tracking.
//!
//! - `timer`: pure countdown state machine
//! - `ticker`: the 1-second tick source
//! - `controller`: applies state machine effects
//! - `view`: presentation model for front ends
//! - `storage`, `report`: bounded history and weekly statistics

pub mod controller;
pub mod quotes;
pub mod report;
pub mod session;
pub mod storage;
pub mod ticker;
pub mod timer;
pub mod view;

pub use controller::{Command, FocusController};
pub use quotes::{QuotePicker, RandomPicker, QUOTES};
pub use report::{date_label, format_weekly, weekly_count, HistoryEntry, HistoryReport};
pub use session::Session;
pub use storage::{HistoryStore, DEFAULT_MAX_SESSIONS, HISTORY_KEY};
pub use ticker::Ticker;
pub use timer::{
    parse_minutes, try_parse_minutes, Effect, TimerEvent, TimerPhase, TimerState,
    DEFAULT_MINUTES,
};
pub use view::{HistoryView, View};
