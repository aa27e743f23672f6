//! `AppConfig` struct and TOML read/write.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `api.api_key`.
pub const API_KEY_ENV: &str = "TVDB_API_KEY";

/// Environment variable overriding `api.pin`.
pub const PIN_ENV: &str = "TVDB_PIN";

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// TVDB API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// TVDB API configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Project API key.
    pub api_key: Option<String>,
    /// Subscriber pin, sent on login when set.
    pub pin: Option<String>,
    /// Base URL override (e.g. a staging host).
    pub base_url: Option<String>,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Log in again and retry once when a request is rejected with 401.
    pub auto_relogin: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            pin: None,
            base_url: None,
            timeout_secs: 30,
            auto_relogin: true,
        }
    }
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Applies `TVDB_API_KEY` / `TVDB_PIN` on top of the file values.
    ///
    /// Empty variables are ignored.
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(key) = non_empty(API_KEY_ENV) {
            self.api.api_key = Some(key);
        }
        if let Some(pin) = non_empty(PIN_ENV) {
            self.api.pin = Some(pin);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert_eq!(config.api.api_key, None);
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.auto_relogin);
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        // Arrange
        let config = AppConfig {
            api: ApiConfig {
                api_key: Some(String::from("key")),
                pin: Some(String::from("1234")),
                base_url: Some(String::from("https://example.com/v4/")),
                timeout_secs: 5,
                auto_relogin: false,
            },
        };

        // Act
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        // Assert
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            api: ApiConfig {
                api_key: Some(String::from("key")),
                ..ApiConfig::default()
            },
        };

        // Act
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\napi_key = \"key\"\n").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.api.api_key.as_deref(), Some("key"));
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.auto_relogin);
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\n").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.unwrap_err().to_string().contains("failed to parse"));
    }

    #[test]
    fn test_env_overrides_file_values() {
        // Arrange
        let config = AppConfig {
            api: ApiConfig {
                api_key: Some(String::from("from-file")),
                pin: Some(String::from("1111")),
                ..ApiConfig::default()
            },
        };

        // Act
        let config = config.with_env_overrides(|key| match key {
            API_KEY_ENV => Some(String::from("from-env")),
            PIN_ENV => Some(String::new()),
            _ => None,
        });

        // Assert
        assert_eq!(config.api.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.api.pin.as_deref(), Some("1111"));
    }
}
