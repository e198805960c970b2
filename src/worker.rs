//! Executes UI commands against the gateway and reports back as events.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::audio::AudioSink;
use crate::gateway::{self, AiGateway};
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Capacity of the UI → worker command queue.
pub const COMMAND_QUEUE: usize = 32;

pub struct GatewayWorker {
    receiver: mpsc::Receiver<UiCommand>,
    gateway: Arc<dyn AiGateway>,
    sink: Arc<dyn AudioSink>,
}

impl GatewayWorker {
    pub fn new(
        receiver: mpsc::Receiver<UiCommand>,
        gateway: Arc<dyn AiGateway>,
        sink: Arc<dyn AudioSink>,
    ) -> Self {
        Self {
            receiver,
            gateway,
            sink,
        }
    }

    /// Runs until every command sender is dropped. Each command gets its own
    /// task, so calls overlap and complete in any order.
    pub async fn run(mut self, events: Sender<AppEvent>) {
        while let Some(command) = self.receiver.recv().await {
            let gateway = Arc::clone(&self.gateway);
            let sink = Arc::clone(&self.sink);
            let events = events.clone();
            tokio::spawn(async move {
                let event = execute(gateway.as_ref(), sink, command).await;
                if events.send(event).is_err() {
                    tracing::trace!("Worker: event dropped (UI loop gone)");
                }
            });
        }
        tracing::debug!("Worker: command channel closed");
    }
}

async fn execute(
    gateway: &dyn AiGateway,
    sink: Arc<dyn AudioSink>,
    command: UiCommand,
) -> AppEvent {
    match command {
        UiCommand::DetectIngredients { image } => {
            let result = gateway.detect_ingredients(&image).await;
            AppEvent::IngredientsDetected { result }
        }
        UiCommand::GenerateRecipes {
            request_id,
            ingredients,
            restriction,
        } => {
            let result = gateway.generate_recipes(&ingredients, restriction).await;
            AppEvent::RecipesGenerated { request_id, result }
        }
        UiCommand::SpeakStep { text } => {
            gateway::speak_step(gateway, sink, &text).await;
            AppEvent::NarrationFinished
        }
    }
}
