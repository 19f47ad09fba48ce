//! Configuration management.
//!
//! Handles loading/saving settings, default values, and ensuring required
//! directories exist. The analysis service address lives here; the session
//! core itself never reads configuration directly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the analysis service.
    pub api_base_url: String,

    /// Per-request timeout in seconds. Analysis runs model inference on the
    /// server side, so this is generous by default.
    pub request_timeout_secs: u64,

    /// Folder where duration plots are written by the CLI.
    pub plot_output_folder: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 120,
            plot_output_folder: PathBuf::from("plots"),
        }
    }
}

impl AppConfig {
    /// Load configuration from file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Ensure required directories exist.
    pub fn ensure_directories(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.plot_output_folder)?;
        Ok(())
    }

    /// Get default settings file path (in current directory).
    pub fn default_path() -> PathBuf {
        PathBuf::from("settings.json")
    }

    /// Load from the default location or fall back to defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load(&Self::default_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn config_serialization_round_trip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut config = AppConfig::default();
        config.api_base_url = "http://analysis.internal:9000".to_string();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
