//! Configuration loading with format dispatch by file extension.

use std::fs;
use std::path::Path;

use crate::model::Config;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

impl Config {
    /// Load a configuration file, dispatching on extension
    /// (`.toml`, `.json`, `.yaml`/`.yml`).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "toml" => Self::from_toml(&content),
            "json" => Self::from_json(&content),
            "yaml" | "yml" => Self::from_yaml(&content),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }
}
