//! Path resolution for zentro configuration and data files.
//!
//! All zentro data is stored in `~/.zentro/` unless overridden:
//! - `config.yaml` - Main configuration file
//! - `zentro.db` - `SQLite` key-value store holding session history
//! - `zentro.log` - Log output (the TUI owns stdout)

use std::path::{Path, PathBuf};

use crate::error::ZentroError;

/// Paths to zentro configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.zentro/`
    pub root: PathBuf,
    /// Config file: `~/.zentro/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.zentro/zentro.db`
    pub database: PathBuf,
    /// Log file: `~/.zentro/zentro.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ZentroError> {
        let home = std::env::var("HOME").map_err(|_| {
            ZentroError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".zentro")))
    }

    /// Resolve paths from an optional override, falling back to `~/.zentro/`.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory
    /// cannot be determined.
    pub fn resolve(root: Option<&Path>) -> Result<Self, ZentroError> {
        root.map_or_else(Self::new, |r| Ok(Self::with_root(r.to_path_buf())))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("zentro.db"),
            log_file: root.join("zentro.log"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), ZentroError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                ZentroError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-zentro");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("zentro.db"));
        assert_eq!(paths.log_file, root.join("zentro.log"));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let root = PathBuf::from("/tmp/elsewhere");
        let paths = Paths::resolve(Some(&root)).unwrap();
        assert_eq!(paths.root, root);
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".zentro"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
