//! Gemini `generateContent` REST client.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::error::GatewayError;
use super::prompts::{
    narration_prompt, parse_ingredient_list, parse_recipes, recipe_prompt, recipe_schema,
    DETECT_INSTRUCTION,
};
use super::AiGateway;
use crate::audio::PcmBuffer;
use crate::capture::ImagePayload;
use crate::config::{AudioConfig, CredentialStatus, GeminiConfig};
use crate::domain::{DietaryRestriction, Recipe};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn image(image: &ImagePayload) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            }),
        }
    }
}

impl GenerateContentResponse {
    fn first_content(&self) -> Option<&Content> {
        self.candidates.first().map(|c| &c.content)
    }

    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.first_content()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Inline data of the first part of the first candidate.
    fn first_inline_data(&self) -> Option<&InlineData> {
        self.first_content()
            .and_then(|content| content.parts.first())
            .and_then(|part| part.inline_data.as_ref())
    }
}

/// Gateway backed by the Gemini REST API.
pub struct GeminiGateway {
    client: Client,
    config: GeminiConfig,
    credential: CredentialStatus,
    sample_rate: u32,
    channels: u16,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig, audio: &AudioConfig) -> Self {
        let credential = config.resolve_credential();
        Self::with_credential(config, credential, audio)
    }

    /// Build with an already resolved credential instead of reading the environment.
    pub fn with_credential(
        config: GeminiConfig,
        credential: CredentialStatus,
        audio: &AudioConfig,
    ) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        if let CredentialStatus::Unconfigured { reason } = &credential {
            tracing::warn!("Gemini API key missing ({}); every AI call will fail", reason);
        }

        Self {
            client,
            config,
            credential,
            sample_rate: audio.sample_rate,
            channels: audio.channels,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        let api_key = match &self.credential {
            CredentialStatus::Configured(secret) => secret,
            CredentialStatus::Unconfigured { reason } => {
                return Err(GatewayError::MissingCredential {
                    reason: reason.clone(),
                })
            }
        };

        let started = std::time::Instant::now();
        let response = self
            .client
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|source| GatewayError::Connection {
                model: model.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| GatewayError::Connection {
                model: model.to_string(),
                source,
            })?;

        tracing::debug!(
            model,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Gemini call completed"
        );

        if !status.is_success() {
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        serde_json::from_slice(&body)
            .map_err(|e| GatewayError::MalformedResponse(format!("invalid envelope: {}", e)))
    }
}

/// Pull `error.message` out of a Gemini error body, or fall back to the raw text.
fn upstream_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}

#[async_trait]
impl AiGateway for GeminiGateway {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn detect_ingredients(&self, image: &ImagePayload) -> Result<Vec<String>, GatewayError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::image(image), Part::text(DETECT_INSTRUCTION)],
            }],
            generation_config: None,
        };
        let response = self.generate(&self.config.vision_model, &request).await?;
        Ok(parse_ingredient_list(&response.text()))
    }

    async fn generate_recipes(
        &self,
        ingredients: &[String],
        restriction: DietaryRestriction,
    ) -> Result<Vec<Recipe>, GatewayError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(recipe_prompt(ingredients, restriction))],
            }],
            generation_config: Some(serde_json::json!({
                "responseMimeType": "application/json",
                "responseSchema": recipe_schema(),
            })),
        };
        let response = self.generate(&self.config.recipe_model, &request).await?;
        Ok(parse_recipes(&response.text())?)
    }

    async fn synthesize_speech(&self, text: &str) -> Result<PcmBuffer, GatewayError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(narration_prompt(text))],
            }],
            generation_config: Some(serde_json::json!({
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": self.config.voice }
                    }
                }
            })),
        };
        let response = self.generate(&self.config.speech_model, &request).await?;
        let inline = response.first_inline_data().ok_or_else(|| {
            GatewayError::MalformedResponse("no audio data in response".to_string())
        })?;
        let bytes = STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| GatewayError::Audio(e.to_string()))?;
        Ok(PcmBuffer::decode_le16(&bytes, self.sample_rate, self.channels))
    }
}
