//! Command line surface.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::capture;
use crate::config::Config;
use crate::domain::{DietaryRestriction, Recipe};
use crate::gateway::{self, AiGateway, GeminiGateway};

#[derive(Debug, Parser)]
#[command(name = "fridgechef")]
#[command(about = "Turn a photo of your fridge into recipes", version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Analyze this image on start-up
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Initial dietary filter: none, vegetarian, vegan, keto, paleo, gluten-free
    #[arg(long, value_name = "NAME", default_value = "none")]
    pub diet: DietaryRestriction,

    /// Log file (defaults to the platform data dir)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Analyze --image without the UI and print the result as JSON
    #[arg(long, requires = "image")]
    pub headless: bool,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        Config::load_from(&path).with_context(|| format!("loading {}", path.display()))
    }
}

#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub ingredients: Vec<String>,
    pub restriction: DietaryRestriction,
    pub recipes: Vec<Recipe>,
}

/// One detection followed by at most one generation, with the same
/// empty-on-failure semantics as the UI.
pub async fn analyze(
    provider: &dyn AiGateway,
    image: &Path,
    restriction: DietaryRestriction,
) -> Result<HeadlessReport> {
    let Some(payload) = capture::capture_file(image)? else {
        bail!("no image given");
    };
    let ingredients = gateway::detect_ingredients(provider, &payload).await;
    let recipes = if ingredients.is_empty() {
        Vec::new()
    } else {
        gateway::generate_recipes(provider, &ingredients, restriction).await
    };
    Ok(HeadlessReport {
        ingredients,
        restriction,
        recipes,
    })
}

pub fn run_headless(config: &Config, image: &Path, restriction: DietaryRestriction) -> Result<()> {
    let gateway = GeminiGateway::new(config.gemini.clone(), &config.audio);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let report = runtime.block_on(analyze(&gateway, image, restriction))?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
