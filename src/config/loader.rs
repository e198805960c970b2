use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/fridgechef/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("fridgechef").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. An existing file is
    /// parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

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
    /// - Base URL and all model names are non-empty
    /// - Sample rate is positive and the channel count is between 1 and 8
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gemini = &self.gemini;
        let required = [
            ("gemini.base_url", &gemini.base_url),
            ("gemini.vision_model", &gemini.vision_model),
            ("gemini.recipe_model", &gemini.recipe_model),
            ("gemini.speech_model", &gemini.speech_model),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must not be empty", field),
                });
            }
        }

        if self.audio.sample_rate == 0 {
            return Err(ConfigError::ValidationError {
                message: "audio.sample_rate must be greater than 0".to_string(),
            });
        }

        if !(1..=8).contains(&self.audio.channels) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "audio.channels must be between 1 and 8, got {}",
                    self.audio.channels
                ),
            });
        }

        Ok(())
    }

    /// Default location of the log file when none is configured.
    pub fn default_log_path() -> PathBuf {
        let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("fridgechef").join("fridgechef.log")
    }
}
