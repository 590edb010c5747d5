//! CLI commands.

pub mod config;
pub mod endpoints;
pub mod run;

use anyhow::{Context, Result};
use classroom_core::Config;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "classroom.toml";

/// Load the file configuration, then layer the environment on top.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_required(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::load(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}
