//! AI gateway: the three remote calls the kitchen relies on.
//!
//! The [`AiGateway`] trait reports failures as [`GatewayError`] so callers can
//! tell "the provider found nothing" apart from "the call failed". The free
//! functions below wrap it with the degrade-to-empty contract used by the UI:
//! they never return an error and only log failures.

mod error;
mod gemini;
pub mod prompts;

use async_trait::async_trait;
use std::sync::Arc;

use crate::audio::{AudioSink, PcmBuffer};
use crate::capture::ImagePayload;
use crate::domain::{DietaryRestriction, Recipe};

pub use error::GatewayError;
pub use gemini::GeminiGateway;

/// Remote AI provider. Every call is a single attempt with no retry.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Identify food items in a fridge photo.
    ///
    /// Returns trimmed, non-empty item names; an empty vector means the
    /// provider recognized nothing.
    async fn detect_ingredients(&self, image: &ImagePayload) -> Result<Vec<String>, GatewayError>;

    /// Ask for recipe suggestions using `ingredients` under `restriction`.
    async fn generate_recipes(
        &self,
        ingredients: &[String],
        restriction: DietaryRestriction,
    ) -> Result<Vec<Recipe>, GatewayError>;

    /// Synthesize narration audio for `text`.
    async fn synthesize_speech(&self, text: &str) -> Result<PcmBuffer, GatewayError>;
}

/// Ingredient detection that degrades to an empty list on failure.
pub async fn detect_ingredients(gateway: &dyn AiGateway, image: &ImagePayload) -> Vec<String> {
    match gateway.detect_ingredients(image).await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(provider = gateway.name(), kind = err.kind(), "Error analyzing image: {}", err);
            Vec::new()
        }
    }
}

/// Recipe generation that degrades to an empty list on failure.
pub async fn generate_recipes(
    gateway: &dyn AiGateway,
    ingredients: &[String],
    restriction: DietaryRestriction,
) -> Vec<Recipe> {
    match gateway.generate_recipes(ingredients, restriction).await {
        Ok(recipes) => recipes,
        Err(err) => {
            tracing::warn!(provider = gateway.name(), kind = err.kind(), "Error generating recipes: {}", err);
            Vec::new()
        }
    }
}

/// Synthesize `text` and start playing it. Failures are logged and swallowed.
///
/// Starting playback may block while the output device opens, so it runs on
/// the blocking pool instead of the calling task.
pub async fn speak_step(gateway: &dyn AiGateway, sink: Arc<dyn AudioSink>, text: &str) {
    let buffer = match gateway.synthesize_speech(text).await {
        Ok(buffer) => buffer,
        Err(err) => {
            tracing::warn!(provider = gateway.name(), kind = err.kind(), "TTS error: {}", err);
            return;
        }
    };
    let sink_name = sink.name();
    match tokio::task::spawn_blocking(move || sink.play(buffer)).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => tracing::warn!(sink = sink_name, "Narration playback failed: {}", err),
        Err(err) => tracing::warn!(sink = sink_name, "Narration playback task failed: {}", err),
    }
}
