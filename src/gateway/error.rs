//! Error classification for gateway calls.

use thiserror::Error;

/// Errors that can occur while talking to the AI provider.
///
/// Nothing is retried; callers decide how to degrade.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No API key was configured
    #[error("No API key configured: {reason}")]
    MissingCredential { reason: String },

    /// Failed to reach the provider or read its response
    #[error("Connection to '{model}' failed: {source}")]
    Connection {
        model: String,
        #[source]
        source: reqwest::Error,
    },

    /// Provider answered with a non-success status
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Response envelope did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Recipe payload did not match the requested schema
    #[error("Schema violation: {0}")]
    Schema(#[from] serde_json::Error),

    /// Audio payload could not be decoded
    #[error("Audio decode failed: {0}")]
    Audio(String),
}

impl GatewayError {
    /// Short stable label for logs and the status line.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::MissingCredential { .. } => "missing_credential",
            GatewayError::Connection { .. } => "connection_error",
            GatewayError::Upstream { .. } => "upstream_error",
            GatewayError::MalformedResponse(_) => "malformed_response",
            GatewayError::Schema(_) => "schema_violation",
            GatewayError::Audio(_) => "audio_error",
        }
    }
}
