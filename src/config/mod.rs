mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString, API_KEY_ENV_VARS};
pub use loader::ConfigError;
pub use types::{AudioConfig, Config, GeminiConfig, LoggingConfig};
