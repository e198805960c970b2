use crate::audio::build_sink;
use crate::config::Config;
use crate::domain::DietaryRestriction;
use crate::gateway::{AiGateway, GeminiGateway};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::{GatewayWorker, COMMAND_QUEUE};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Start-up choices taken from the command line.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// Analyze this image right away, as if picked in the fridge view.
    pub initial_image: Option<PathBuf>,
    pub dietary: DietaryRestriction,
}

pub fn run(config: &Config, options: RuntimeOptions) -> io::Result<()> {
    let credential = config.gemini.resolve_credential();
    let credential_configured = credential.is_configured();
    let gateway: Arc<dyn AiGateway> = Arc::new(GeminiGateway::with_credential(
        config.gemini.clone(),
        credential,
        &config.audio,
    ));
    let sink = build_sink(&config.audio);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("fridgechef-worker")
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    let worker = GatewayWorker::new(command_rx, gateway, sink);
    runtime.spawn(worker.run(events.sender()));

    let mut app = App::new(credential_configured);
    app.set_command_sender(command_tx);
    app.set_dietary(options.dietary);
    if let Some(path) = options.initial_image {
        app.capture_from_path(&path);
    }
    tracing::info!(
        credential_configured,
        audio = config.audio.enabled,
        "Kitchen UI started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::ImagePaste {
                    app.on_image_paste();
                }
            }
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::IngredientsDetected { result }) => app.on_ingredients_detected(result),
            Ok(AppEvent::RecipesGenerated { request_id, result }) => {
                app.on_recipes_generated(request_id, result)
            }
            Ok(AppEvent::NarrationFinished) => app.on_narration_finished(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // In-flight calls are not cancelled; they are simply abandoned
    runtime.shutdown_background();
    tracing::info!("Kitchen UI stopped");
    Ok(())
}
