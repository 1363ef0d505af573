//! Game configuration files.

use anyhow::{Context, Result};
use std::path::Path;
use strictly_nxn::GameConfig;
use tracing::{debug, info, instrument};

/// Loads a [`GameConfig`] from a TOML file.
///
/// Missing keys fall back to their defaults.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig> {
    debug!("Loading config from file");
    let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
        format!("Failed to read config file {}", path.as_ref().display())
    })?;

    let config: GameConfig = toml::from_str(&content).context("Failed to parse config")?;

    info!(size = config.size, symbols = config.symbols.len(), "Config loaded successfully");
    Ok(config)
}
