//! `SQLite` database connection and operations.
//!
//! The database is stored at `~/.zentro/zentro.db` and holds a single
//! key-value table, the local equivalent of browser storage.

use rusqlite::{params, Connection, OptionalExtension};

use crate::config::Paths;
use crate::error::ZentroError;

use super::migrations;
use super::KeyValueStore;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database under the given paths.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open(paths: &Paths) -> Result<Self, ZentroError> {
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, ZentroError> {
        let conn = Connection::open(path).map_err(|e| {
            ZentroError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, ZentroError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            ZentroError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    fn migrate(&self) -> Result<(), ZentroError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, ZentroError> {
        migrations::get_version(&self.conn)
    }
}

impl KeyValueStore for Database {
    fn get_item(&self, key: &str) -> Result<Option<String>, ZentroError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| ZentroError::Database(format!("Failed to read {key}: {e}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ZentroError> {
        self.conn
            .execute(
                r"INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
                  ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value],
            )
            .map_err(|e| ZentroError::Database(format!("Failed to write {key}: {e}")))?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ZentroError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])
            .map_err(|e| ZentroError::Database(format!("Failed to delete {key}: {e}")))?;
        Ok(())
    }
}
