//! Print the effective configuration.

use anyhow::Result;
use std::path::Path;

/// Print the configuration after file and environment overrides.
pub fn run(path: Option<&Path>) -> Result<()> {
    let config = super::load_config(path)?;
    config.validate()?;
    print!("{}", config.to_toml()?);
    Ok(())
}
