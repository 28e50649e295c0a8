//! Persistence of `config.toml`.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Failures locating, reading or writing the config file.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory could be determined for this platform")]
    DirNotFound,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A single config file, by default `config.toml` in the platform config dir.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Uses `path_override` when given, otherwise the platform default.
    ///
    /// # Errors
    /// Returns [`ConfigError::DirNotFound`] when no override is given and the
    /// platform has no config directory.
    pub fn locate(path_override: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path_override {
            Some(path) => path.to_path_buf(),
            None => AppConfig::default_config_dir()
                .ok_or(ConfigError::DirNotFound)?
                .join(CONFIG_FILE_NAME),
        };
        Ok(Self { path })
    }

    /// Uses exactly `path`.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the file, writing the defaults first when it does not exist.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed content and I/O errors otherwise.
    pub fn read(&self) -> Result<AppConfig, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No config file yet, writing defaults");
                let config = AppConfig::default();
                self.save(&config)?;
                return Ok(config);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Like [`Self::read`], but a malformed file falls back to the defaults
    /// and is left as it is.
    ///
    /// # Errors
    /// Returns I/O errors.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        match self.read() {
            Err(ConfigError::Parse { path, source }) => {
                warn!(path = %path.display(), error = %source, "Ignoring malformed config");
                Ok(AppConfig::default())
            }
            other => other,
        }
    }

    /// Replaces the file atomically.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;
        let write_error = |source: std::io::Error| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(write_error)?;

        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
        staged.write_all(content.as_bytes()).map_err(write_error)?;
        staged.persist(&self.path).map_err(|e| write_error(e.error))?;

        debug!(path = %self.path.display(), "Config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EndOfListPolicy;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("nested").join(CONFIG_FILE_NAME));

        let config = store.load().unwrap();
        assert_eq!(config.lesson.reward_points, 75);
        assert!(store.path().exists());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join(CONFIG_FILE_NAME));
        fs::write(store.path(), "invalid_toml = [").unwrap();

        assert!(matches!(store.read(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_falls_back_and_keeps_malformed_file() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join(CONFIG_FILE_NAME));
        fs::write(store.path(), "invalid_toml = [").unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.lesson.end_of_list, EndOfListPolicy::Clamp);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "invalid_toml = [");
    }

    #[test]
    fn test_unreadable_path_is_not_masked() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path());

        assert!(matches!(store.load(), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_save_then_read() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join(CONFIG_FILE_NAME));

        let mut config = AppConfig::default();
        config.lesson.reward_points = 100;
        config.api.base_url = "https://learn.example.org".to_string();
        store.save(&config).unwrap();

        let loaded = store.read().unwrap();
        assert_eq!(loaded.lesson.reward_points, 100);
        assert_eq!(loaded.api.base_url, "https://learn.example.org");
    }

    #[test]
    fn test_override_wins_over_platform_dir() {
        let custom = PathBuf::from("/tmp/studyline-custom.toml");
        let store = ConfigStore::locate(Some(&custom)).unwrap();
        assert_eq!(store.path(), custom);
    }
}
