//! Configuration file storage.
//!
//! The configuration lives in a single JSON file, by default
//! `<config dir>/cd-recent/config.json`.

use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::Configuration;
use crate::error::{CdRecentError, Result};

/// Reads and writes the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Directory name under the platform config directory.
    pub const APP_DIR: &'static str = "cd-recent";

    /// Configuration file name.
    pub const FILE_NAME: &'static str = "config.json";

    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            })
            .join(Self::APP_DIR)
            .join(Self::FILE_NAME)
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, creating and saving defaults on first run.
    pub fn load(&self) -> Result<Configuration> {
        if !self.path.exists() {
            tracing::debug!("No config at {:?}, writing defaults", self.path);
            let config = Configuration::default();
            self.save(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)?;
        let config: Configuration =
            serde_json::from_str(&content).map_err(|e| CdRecentError::ConfigParseError {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Loaded config from {:?} ({} visits, {} tracking)",
            self.path,
            config.recently_visited_directories.len(),
            config.tracking_mode()
        );
        Ok(config)
    }

    /// Save the configuration in full.
    ///
    /// Writes to a uniquely named temp file next to the target and renames
    /// it over the target. A crash mid-write never leaves a truncated file,
    /// and concurrent saves each replace the file whole (last writer wins).
    pub fn save(&self, config: &Configuration) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
                parent
            }
            _ => Path::new("."),
        };

        let content = serde_json::to_string_pretty(config)
            .context("Failed to serialize configuration")?;

        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in {:?}", dir))?;
        temp.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write config for {:?}", self.path))?;
        temp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace {:?}", self.path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_path_ends_with_app_file() {
        let path = ConfigStore::default_path();
        assert!(path.ends_with("cd-recent/config.json"));
    }

    #[test]
    fn load_creates_defaults_on_first_run() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().join("nested").join("config.json"));

        let config = store.load().unwrap();

        assert_eq!(config, Configuration::default());
        assert!(store.path().exists());
    }

    #[test]
    fn save_and_reload_round_trips_default_limit() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().join("config.json"));

        let mut config = store.load().unwrap();
        config.set_default_limit("7").unwrap();
        store.save(&config).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.default_limit.get(), 7);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().join("config.json"));

        store.save(&Configuration::default()).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, ["config.json"]);
    }

    #[test]
    fn concurrent_saves_all_succeed() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().join("config.json"));

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let mut config = Configuration::default();
                    config.add_visit(format!("/thread/{}", n));
                    (0..50).map(|_| store.save(&config).is_ok()).all(|ok| ok)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(store.load().unwrap().recently_visited_directories.len(), 1);
    }

    #[test]
    fn saved_file_uses_documented_keys() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().join("config.json"));
        let mut config = Configuration::default();
        config.add_visit("/srv");
        store.save(&config).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();

        assert!(raw.contains("\"historyFilePath\""));
        assert!(raw.contains("\"defaultLimit\""));
        assert!(raw.contains("\"dynamicTracking\""));
        assert!(raw.contains("\"recentlyVisitedDirectories\""));
        assert!(raw.contains("/srv"));
    }

    #[test]
    fn corrupt_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ConfigStore::new(&path).load().unwrap_err();

        assert!(matches!(err, CdRecentError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.json"));
    }
}
