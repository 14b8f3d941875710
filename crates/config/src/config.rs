//! Top-level configuration struct and loading logic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::ApiConfig;
use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{default_log_path, find_config_file, read_config_file, write_config_file};

/// Application configuration.
///
/// Every section is optional in the file; missing sections take their
/// defaults, so an empty object is a valid configuration.
///
/// # Examples
///
/// ```
/// use roster_config::{ApiConfig, Config};
///
/// let config = Config::default();
/// assert_eq!(config.api.collection_url(), "http://localhost:8080/users");
///
/// let config = Config {
///     api: ApiConfig::new("https://hr.example.com", "staff"),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Employee endpoint location.
    #[serde(default)]
    pub api: ApiConfig,

    /// Log filter and destination.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// See [`crate::persistence`] for the search order. When no file is
    /// found the default configuration is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads and validates configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use roster_config::Config;
    ///
    /// # fn example() -> roster_config::Result<()> {
    /// let config = Config::load_from("roster.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(&self) -> Result<()> {
        self.api.validate()
    }

    /// Returns the log file path: the configured one, or the default
    /// location in the user data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no file is configured and the home directory
    /// cannot be determined.
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(path) => Ok(path.clone()),
            None => default_log_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config, Config::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial_section() {
        let config: Config = serde_json::from_str(r#"{"api": {"collection": "staff"}}"#).unwrap();
        assert_eq!(config.api.base_url, crate::api::DEFAULT_BASE_URL);
        assert_eq!(config.api.collection, "staff");
    }

    #[test]
    fn load_from_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json5");
        std::fs::write(
            &path,
            r#"
            {
                // local dev server
                api: { base_url: "http://127.0.0.1:9000", collection: "people" },
                logging: { filter: "roster_client=debug" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.collection_url(), "http://127.0.0.1:9000/people");
        assert_eq!(config.logging.filter, "roster_client=debug");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn load_from_rejects_invalid_base_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, r#"{"api": {"base_url": "localhost:8080"}}"#).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            api: ApiConfig::new("https://hr.example.com/api", "staff"),
            logging: LoggingConfig {
                filter: "debug".to_string(),
                file: Some(PathBuf::from("/tmp/roster.log")),
            },
        };

        original.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), original);
    }

    #[test]
    fn log_path_prefers_configured_file() {
        let config = Config {
            logging: LoggingConfig {
                file: Some(PathBuf::from("/var/log/roster.log")),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/var/log/roster.log"));
    }
}
