use anyhow::Result;
use clap::Parser;

use fridgechef::cli::{self, Cli};
use fridgechef::logging;
use fridgechef::ui::runtime::{self, RuntimeOptions};

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.load_config()?;

    let log_path = logging::resolve_log_path(args.log_file.as_deref(), &config.logging);
    logging::init_tracing(&log_path, &config.logging)?;
    tracing::info!(log = %log_path.display(), "FridgeChef starting");

    if args.headless {
        if let Some(image) = &args.image {
            return cli::run_headless(&config, image, args.diet);
        }
    }

    runtime::run(
        &config,
        RuntimeOptions {
            initial_image: args.image,
            dietary: args.diet,
        },
    )?;
    Ok(())
}
