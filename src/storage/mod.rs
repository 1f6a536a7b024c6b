//! Storage layer for zentro.
//!
//! Session history lives under a single key in a key-value store. The
//! production store is `SQLite`; tests use [`MemoryStore`].

mod database;
mod migrations;

use std::collections::HashMap;

pub use database::Database;

use crate::error::ZentroError;

/// A string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, ZentroError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ZentroError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), ZentroError>;
}

/// Volatile store backed by a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ZentroError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ZentroError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ZentroError> {
        self.items.remove(key);
        Ok(())
    }
}
