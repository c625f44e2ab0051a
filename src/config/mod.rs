//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/locatiezoeker/config.toml

pub mod defaults;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use defaults::*;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// External API endpoints
    #[serde(default)]
    pub api: ApiConfig,
}

/// External API endpoints
///
/// Overridable so a deployment can pin a mirror or a test can point at a
/// local mock; the search tuning itself (rows, boost) is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Locatieserver suggest endpoint
    #[serde(default = "default_suggest_url")]
    pub suggest_url: String,

    /// Locatieserver lookup endpoint
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,

    /// KNMI induced-earthquake feed
    #[serde(default = "default_knmi_url")]
    pub knmi_url: String,
}

// Default value functions for serde
fn default_suggest_url() -> String {
    DEFAULT_SUGGEST_URL.to_string()
}
fn default_lookup_url() -> String {
    DEFAULT_LOOKUP_URL.to_string()
}
fn default_knmi_url() -> String {
    DEFAULT_KNMI_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            suggest_url: default_suggest_url(),
            lookup_url: default_lookup_url(),
            knmi_url: default_knmi_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path ("section.key")
    pub fn get(&self, key: &str) -> Option<String> {
        match key.split('.').collect::<Vec<_>>().as_slice() {
            ["api", "suggest_url"] => Some(self.api.suggest_url.clone()),
            ["api", "lookup_url"] => Some(self.api.lookup_url.clone()),
            ["api", "knmi_url"] => Some(self.api.knmi_url.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key path ("section.key")
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.split('.').collect::<Vec<_>>().as_slice() {
            ["api", "suggest_url"] => self.api.suggest_url = value.to_string(),
            ["api", "lookup_url"] => self.api.lookup_url = value.to_string(),
            ["api", "knmi_url"] => self.api.knmi_url = value.to_string(),
            _ => return Err(Error::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// List the keys `get`/`set` understand
    pub fn available_keys() -> &'static [&'static str] {
        &["api.suggest_url", "api.lookup_url", "api.knmi_url"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_production_endpoints() {
        let config = Config::default();
        assert!(config.api.suggest_url.contains("api.pdok.nl"));
        assert!(config.api.lookup_url.ends_with("/lookup"));
        assert!(config.api.knmi_url.contains("knmi.nl"));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config =
            toml::from_str("[api]\nsuggest_url = \"http://localhost:8080/suggest\"\n").unwrap();
        assert_eq!(config.api.suggest_url, "http://localhost:8080/suggest");
        assert_eq!(config.api.lookup_url, DEFAULT_LOOKUP_URL);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config
            .set("api.knmi_url", "http://localhost:9090/all_induced.json")
            .unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(
            loaded.get("api.knmi_url").unwrap(),
            "http://localhost:9090/all_induced.json"
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut config = Config::default();
        assert!(config.set("api.bogus", "x").is_err());
        assert!(config.get("server.port").is_none());
    }
}
