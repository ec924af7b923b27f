// ABOUTME: Entry point for the autocd CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use autocd::config;
use autocd::error::Result;
use autocd::output::{Output, OutputMode};
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbose flag when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("autocd=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if let Err(e) = run(cli, mode).await {
        Output::new(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mode: OutputMode) -> Result<()> {
    let context = cli.context.as_deref();

    match cli.command {
        Commands::Init { private, force } => {
            let cwd = std::env::current_dir()?;
            config::init_config(&cwd, !private, force)?;
            Output::new(mode).success(&format!("Wrote {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Deploy => {
            let (config, spec) = commands::load(cli.config.as_deref())?;
            commands::deploy(&config, &spec, context, Output::new(mode)).await
        }
        Commands::Remove => {
            let (config, spec) = commands::load(cli.config.as_deref())?;
            commands::remove(&config, &spec, context, Output::new(mode)).await
        }
        Commands::Render => {
            let (config, spec) = commands::load(cli.config.as_deref())?;
            commands::render(&config, &spec)
        }
    }
}
