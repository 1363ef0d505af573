//! Game configuration and configuration errors.

use serde::{Deserialize, Serialize};

/// Default board dimension.
pub const DEFAULT_SIZE: usize = 3;

/// Typed game configuration.
///
/// Every field has a default, so a partial TOML table is a valid
/// configuration. Validation happens when the game is set up, not
/// at deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board dimension (3..=50).
    pub size: usize,
    /// One mark per player, in turn order.
    pub symbols: Vec<String>,
    /// Player names by seat. Missing or blank entries get a default name.
    pub player_names: Vec<String>,
}

impl GameConfig {
    /// Returns player names with blank entries mapped to `None`.
    pub fn names(&self) -> Vec<Option<String>> {
        self.player_names
            .iter()
            .map(|name| {
                let name = name.trim();
                (!name.is_empty()).then(|| name.to_string())
            })
            .collect()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            symbols: vec!["x".to_string(), "o".to_string()],
            player_names: Vec::new(),
        }
    }
}

/// Error raised while setting up a game.
///
/// Configuration errors are fatal to construction; the caller must
/// fix the configuration and try again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Board dimension outside the supported range.
    #[display("Board size {} is not playable (must be between 3 and 50)", _0)]
    InvalidSize(usize),

    /// Players and symbols cannot form a game.
    #[display("Game is not playable: {}", _0)]
    NotPlayable(String),
}

impl std::error::Error for ConfigError {}
