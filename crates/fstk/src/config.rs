//! Persistent CLI configuration.
//!
//! A small TOML file under the platform config directory stores values the
//! CLI consumes, such as the default chat model. The client itself never
//! reads this store.

use derive_getters::Getters;
use fstk_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Values persisted by `fstk set` and read by `fstk get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct AppConfig {
    /// Default model for chat completions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chat_model: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {e}")))
    }

    /// Load the configuration at the default path, or defaults when the
    /// file does not exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::new(format!("Failed to create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::new(format!("Failed to write config file: {e}")))
    }

    /// The default config file location for this platform.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::new("No config directory available on this platform"))?;
        Ok(dir.join("fstk").join("config.toml"))
    }

    /// Sets the default chat model.
    pub fn set_chat_model(&mut self, model: impl Into<String>) {
        self.chat_model = Some(model.into());
    }

    /// Reads a stored value by its CLI key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "chatModel" => self.chat_model.clone(),
            _ => None,
        }
    }
}
