//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_gemini;

use fridgechef::capture::ImagePayload;
use fridgechef::config::{AudioConfig, CredentialStatus, GeminiConfig, SecureString};
use fridgechef::domain::{Difficulty, Ingredient, Recipe};
use fridgechef::gateway::GeminiGateway;
use fridgechef::ui::app::{App, UiCommand};
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Gateway helpers ----------------------------------------------------------

/// Gateway pointed at `base_url` with a fixed test key.
pub fn gateway_for(base_url: &str) -> GeminiGateway {
    let config = GeminiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        ..GeminiConfig::default()
    };
    GeminiGateway::with_credential(
        config,
        CredentialStatus::Configured(SecureString::new("test-key".to_string())),
        &AudioConfig::default(),
    )
}

pub fn jpeg_payload() -> ImagePayload {
    ImagePayload {
        mime_type: "image/jpeg".to_string(),
        data: "/9j/4AAQSkZJRg==".to_string(),
    }
}

pub fn recipe(id: &str, steps: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        description: "Tasty".to_string(),
        difficulty: Difficulty::Easy,
        prep_time: 15,
        calories: 350,
        ingredients: vec![
            Ingredient {
                name: "eggs".to_string(),
                quantity: "2".to_string(),
            },
            Ingredient {
                name: "spinach".to_string(),
                quantity: "100 g".to_string(),
            },
        ],
        steps: steps.iter().map(|s| s.to_string()).collect(),
        dietary_tags: vec!["vegetarian".to_string()],
    }
}

// -- App helpers --------------------------------------------------------------

/// App wired to a command channel the test can inspect.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(64);
    let mut app = App::new(true);
    app.set_command_sender(tx);
    (app, rx)
}

/// Drain every queued command.
pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// `(request_id, ingredients, restriction)` of every generation command.
pub fn generation_requests(
    commands: &[UiCommand],
) -> Vec<(u64, Vec<String>, fridgechef::domain::DietaryRestriction)> {
    commands
        .iter()
        .filter_map(|command| match command {
            UiCommand::GenerateRecipes {
                request_id,
                ingredients,
                restriction,
            } => Some((*request_id, ingredients.clone(), *restriction)),
            _ => None,
        })
        .collect()
}
