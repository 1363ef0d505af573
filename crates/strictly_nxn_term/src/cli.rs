//! Command-line interface for strictly_nxn.

use crate::settings::load_config;
use clap::Parser;
use std::path::PathBuf;
use strictly_nxn::GameConfig;
use tracing::{debug, instrument};

/// Strictly N×N - tic-tac-toe on any board size for any number of players
#[derive(Parser, Debug)]
#[command(name = "strictly_nxn")]
#[command(about = "N×N tic-tac-toe for any number of players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (3 to 50)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Player symbols in turn order, comma-separated (e.g. x,o,+)
    #[arg(long, value_delimiter = ',')]
    pub symbols: Option<Vec<String>>,

    /// Player names in turn order, comma-separated (blank entries get a default)
    #[arg(short, long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// TOML file with `size`, `symbols` and `player_names`; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colors and text styling
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Resolves the game configuration: defaults, then the config file, then flags.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(symbols) = &self.symbols {
            config.symbols = symbols.clone();
        }
        if let Some(names) = &self.names {
            config.player_names = names.clone();
        }

        debug!(?config, "Resolved game configuration");
        Ok(config)
    }
}
