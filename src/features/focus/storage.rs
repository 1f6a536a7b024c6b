//! Focus session history storage.
//!
//! The whole history is one JSON array stored under [`HISTORY_KEY`],
//! newest first and capped at a fixed length.

use serde_json::Value;
use tracing::{debug, warn};

use super::session::Session;
use crate::error::ZentroError;
use crate::storage::KeyValueStore;

/// Key holding the serialized history.
pub const HISTORY_KEY: &str = "focusTimerHistory";

/// Most sessions ever kept.
pub const DEFAULT_MAX_SESSIONS: usize = 10;

/// Bounded, newest-first session history.
pub struct HistoryStore<S> {
    store: S,
    max_sessions: usize,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Create a history over `store` keeping at most `max_sessions` entries.
    ///
    /// The cap is clamped to `1..=DEFAULT_MAX_SESSIONS`.
    pub fn new(store: S, max_sessions: usize) -> Self {
        Self {
            store,
            max_sessions: max_sessions.clamp(1, DEFAULT_MAX_SESSIONS),
        }
    }

    /// Load the history, newest first.
    ///
    /// A missing key, an unreadable store, or a value that is not a JSON
    /// array all yield an empty history. Only the newest entries up to the
    /// cap are read, and entries that are not valid sessions are skipped.
    pub fn load(&self) -> Vec<Session> {
        let mut entries = self.load_entries();
        entries.truncate(self.max_sessions);
        sessions(entries)
    }

    /// Prepend a session, trim to the cap, and persist.
    ///
    /// Stored entries that don't read as sessions are written back as they
    /// were. Returns the sessions as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be serialized or written.
    pub fn record(&mut self, session: Session) -> Result<Vec<Session>, ZentroError> {
        let mut entries = self.load_entries();
        entries.insert(0, serde_json::to_value(&session)?);
        entries.truncate(self.max_sessions);

        let json = serde_json::to_string(&entries)?;
        self.store.set_item(HISTORY_KEY, &json)?;
        debug!(entries = entries.len(), "session history saved");

        Ok(sessions(entries))
    }

    /// Delete all history.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear(&mut self) -> Result<(), ZentroError> {
        self.store.remove_item(HISTORY_KEY)
    }

    /// Access the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn load_entries(&self) -> Vec<Value> {
        match self.store.get_item(HISTORY_KEY) {
            Ok(Some(raw)) => parse_entries(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read session history");
                Vec::new()
            }
        }
    }
}

/// Parse a stored history value, tolerating malformed input.
#[must_use]
pub fn parse_history(raw: &str) -> Vec<Session> {
    sessions(parse_entries(raw))
}

/// Raw array entries of a stored history value.
fn parse_entries(raw: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!("session history is not a JSON array, ignoring it");
            Vec::new()
        }
        Err(e) => {
            warn!(error = %e, "session history is not valid JSON, ignoring it");
            Vec::new()
        }
    }
}

fn sessions(entries: Vec<Value>) -> Vec<Session> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Session>(entry) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "skipping malformed session entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::{Database, MemoryStore};
    use chrono::{Duration, Local, TimeZone};

    fn create_test_history() -> HistoryStore<MemoryStore> {
        HistoryStore::new(MemoryStore::new(), DEFAULT_MAX_SESSIONS)
    }

    fn session(duration: u32, minutes_ago: i64) -> Session {
        let base = Local
            .with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
            .earliest()
            .unwrap();
        Session::new(duration, base - Duration::minutes(minutes_ago))
    }

    #[test]
    fn test_absent_key_is_empty() {
        let history = create_test_history();
        assert!(history.load().is_empty());
    }

    #[test]
    fn test_record_prepends() {
        let mut history = create_test_history();

        history.record(session(10, 5)).unwrap();
        history.record(session(20, 0)).unwrap();

        let loaded = history.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].duration, 20);
        assert_eq!(loaded[1].duration, 10);
    }

    #[test]
    fn test_history_is_capped() {
        let mut history = create_test_history();

        for i in 1..=11 {
            history.record(session(i, 0)).unwrap();
        }

        let loaded = history.load();
        assert_eq!(loaded.len(), 10);
        let durations: Vec<u32> = loaded.iter().map(|s| s.duration).collect();
        assert_eq!(durations, vec![11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_custom_cap() {
        let mut history = HistoryStore::new(MemoryStore::new(), 3);
        for i in 1..=5 {
            history.record(session(i, 0)).unwrap();
        }
        assert_eq!(history.load().len(), 3);
    }

    #[test]
    fn test_stored_as_json_array() {
        let mut history = create_test_history();
        let s = session(25, 0);
        history.record(s.clone()).unwrap();

        let raw = history.store().get_item(HISTORY_KEY).unwrap().unwrap();
        let parsed: Vec<Session> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, vec![s]);
    }

    #[test]
    fn test_malformed_value_is_empty() {
        let mut store = MemoryStore::new();
        store.set_item(HISTORY_KEY, "{not json").unwrap();
        let history = HistoryStore::new(store, 10);
        assert!(history.load().is_empty());

        let mut store = MemoryStore::new();
        store.set_item(HISTORY_KEY, r#"{"date":"x"}"#).unwrap();
        let history = HistoryStore::new(store, 10);
        assert!(history.load().is_empty());
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let raw = r#"[
            {"date":"10/19/2026, 12:00:00 PM","duration":25,"timestamp":1},
            {"date":"10/19/2026, 12:00:00 PM","duration":null,"timestamp":2},
            "garbage"
        ]"#;
        let sessions = parse_history(raw);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].timestamp, 1);
    }

    #[test]
    fn test_record_over_malformed_value() {
        let mut store = MemoryStore::new();
        store.set_item(HISTORY_KEY, "oops").unwrap();
        let mut history = HistoryStore::new(store, 10);

        let saved = history.record(session(25, 0)).unwrap();
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn test_cap_never_exceeds_default() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "history:\n  max_sessions: 50\n").unwrap();
        let config = Config::load_from_path(&config_path).unwrap();

        let mut history = HistoryStore::new(MemoryStore::new(), config.history.max_sessions);
        for i in 1..=11 {
            history.record(session(i, 0)).unwrap();
        }

        assert_eq!(history.load().len(), 10);
        let raw = history.store().get_item(HISTORY_KEY).unwrap().unwrap();
        assert_eq!(parse_entries(&raw).len(), 10);
    }

    #[test]
    fn test_record_keeps_unreadable_entries() {
        let null_duration =
            r#"{"date":"10/18/2026, 09:00:00 AM","duration":null,"timestamp":1792328400000}"#;
        let float_timestamp =
            r#"{"date":"10/17/2026, 09:00:00 AM","duration":25,"timestamp":1792242000000.0}"#;
        let mut store = MemoryStore::new();
        store
            .set_item(HISTORY_KEY, &format!("[{null_duration},{float_timestamp}]"))
            .unwrap();
        let mut history = HistoryStore::new(store, DEFAULT_MAX_SESSIONS);
        assert!(history.load().is_empty());

        let saved = history.record(session(5, 0)).unwrap();
        assert_eq!(saved.len(), 1);

        let raw = history.store().get_item(HISTORY_KEY).unwrap().unwrap();
        let stored = parse_entries(&raw);
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0]["duration"], 5);
        assert_eq!(stored[1], serde_json::from_str::<Value>(null_duration).unwrap());
        assert_eq!(stored[2], serde_json::from_str::<Value>(float_timestamp).unwrap());
    }

    #[test]
    fn test_oversized_history_trimmed_on_load() {
        let entries: Vec<Session> = (1..=15).map(|i| session(i, 0)).collect();
        let mut store = MemoryStore::new();
        store
            .set_item(HISTORY_KEY, &serde_json::to_string(&entries).unwrap())
            .unwrap();
        let history = HistoryStore::new(store, DEFAULT_MAX_SESSIONS);

        let loaded = history.load();
        assert_eq!(loaded.len(), 10);
        assert_eq!(loaded[0].duration, 1);
        assert_eq!(loaded[9].duration, 10);
    }

    #[test]
    fn test_clear() {
        let mut history = create_test_history();
        history.record(session(25, 0)).unwrap();

        history.clear().unwrap();

        assert!(history.load().is_empty());
    }

    #[test]
    fn test_sqlite_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let mut history = HistoryStore::new(db, DEFAULT_MAX_SESSIONS);

        let s = session(45, 3);
        history.record(s.clone()).unwrap();

        assert_eq!(history.load(), vec![s]);
    }
}
