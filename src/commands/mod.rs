// ABOUTME: Command module aggregator for the autocd CLI.
// ABOUTME: Shared config loading plus deploy, remove, and render handlers.

mod deploy;
mod render;

pub use deploy::{deploy, remove};
pub use render::render;

use autocd::config::{AppSpec, CiEnvironment, Config};
use autocd::error::Result;
use std::path::Path;

/// Load config (explicit path or discovered) and resolve it against CI variables.
pub fn load(config_path: Option<&Path>) -> Result<(Config, AppSpec)> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::discover(&std::env::current_dir()?)?,
    };

    let ci = CiEnvironment::from_env();
    if ci.is_local() {
        tracing::info!("CI_REGISTRY not set, using local defaults");
    }

    let spec = config.resolve(&ci)?;
    Ok((config, spec))
}
