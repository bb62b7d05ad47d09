use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::motion::RevealThreshold;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/devfolio/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("devfolio").join("config.toml")
    }

    /// Default log file for the interactive mode.
    pub fn default_log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        cache_dir.join("devfolio").join("devfolio.log")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Frame and typing intervals are non-zero
    /// - The reveal threshold is a fraction in `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.frame_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "animation.frame_ms must be greater than zero".to_string(),
            });
        }

        if self.animation.type_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "animation.type_interval_ms must be greater than zero".to_string(),
            });
        }

        self.reveal_threshold()?;
        Ok(())
    }

    pub fn reveal_threshold(&self) -> Result<RevealThreshold, ConfigError> {
        RevealThreshold::new(self.reveal.threshold, self.reveal.margin_rows).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("reveal: {e}"),
            }
        })
    }
}
