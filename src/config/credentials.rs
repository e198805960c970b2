//! API key resolution.
//!
//! The key is looked up in the environment first (`GEMINI_API_KEY`, then
//! `API_KEY`) and falls back to `gemini.api_key` from the config file.

use super::types::GeminiConfig;

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value. Only for building request headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Outcome of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    Configured(SecureString),
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CredentialStatus {
    pub fn is_configured(&self) -> bool {
        matches!(self, CredentialStatus::Configured(_))
    }

    pub fn secret(&self) -> Option<&SecureString> {
        match self {
            CredentialStatus::Configured(secret) => Some(secret),
            CredentialStatus::Unconfigured { .. } => None,
        }
    }
}

impl GeminiConfig {
    /// Resolve the API key from the process environment and this config.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` in place of the process environment.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty());

        let key = from_env.or_else(|| {
            self.api_key
                .clone()
                .filter(|value| !value.trim().is_empty())
        });

        match key {
            Some(key) => CredentialStatus::Configured(SecureString::new(key.trim().to_string())),
            None => CredentialStatus::Unconfigured {
                reason: format!(
                    "set {} or gemini.api_key in the config file",
                    API_KEY_ENV_VARS.join(" / ")
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn test_env_takes_precedence_over_config() {
        let config = GeminiConfig {
            api_key: Some("from-config".to_string()),
            ..GeminiConfig::default()
        };
        let status = config.resolve_credential_with(|name| {
            (name == "API_KEY").then(|| "from-env".to_string())
        });
        assert_eq!(status.secret().map(SecureString::expose), Some("from-env"));
    }

    #[test]
    fn test_gemini_key_wins_over_generic_key() {
        let config = GeminiConfig::default();
        let status = config.resolve_credential_with(|name| match name {
            "GEMINI_API_KEY" => Some("gemini".to_string()),
            "API_KEY" => Some("generic".to_string()),
            _ => None,
        });
        assert_eq!(status.secret().map(SecureString::expose), Some("gemini"));
    }

    #[test]
    fn test_blank_values_are_unconfigured() {
        let config = GeminiConfig {
            api_key: Some("   ".to_string()),
            ..GeminiConfig::default()
        };
        let status = config.resolve_credential_with(|_| Some(String::new()));
        assert!(!status.is_configured());
        match status {
            CredentialStatus::Unconfigured { reason } => assert!(reason.contains("GEMINI_API_KEY")),
            CredentialStatus::Configured(_) => panic!("expected Unconfigured"),
        }
    }

    #[test]
    fn test_config_key_used_without_env() {
        let config = GeminiConfig {
            api_key: Some("from-config".to_string()),
            ..GeminiConfig::default()
        };
        let status = config.resolve_credential_with(|_| None);
        assert_eq!(status.secret().map(SecureString::expose), Some("from-config"));
    }
}
