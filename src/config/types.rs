use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection and model settings for the Gemini API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL for the API (scheme + host, no trailing path).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for ingredient detection on fridge photos.
    #[serde(default = "default_vision_model")]
    pub vision_model: String,
    /// Model used for structured recipe generation.
    #[serde(default = "default_recipe_model")]
    pub recipe_model: String,
    /// Model used for step narration.
    #[serde(default = "default_speech_model")]
    pub speech_model: String,
    /// Prebuilt voice name for narration.
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Connection timeout in seconds. Requests themselves are never timed out.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// API key fallback when neither `GEMINI_API_KEY` nor `API_KEY` is set.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Narration playback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Sample rate of the PCM returned by the speech model.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_channels")]
    pub channels: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_vision_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_recipe_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_voice() -> String {
    "Kore".to_string()
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

fn default_sample_rate() -> u32 {
    24_000
}

fn default_channels() -> u16 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            vision_model: default_vision_model(),
            recipe_model: default_recipe_model(),
            speech_model: default_speech_model(),
            voice: default_voice(),
            connect_timeout_seconds: default_connect_timeout(),
            api_key: None,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sample_rate: default_sample_rate(),
            channels: default_channels(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
