//! Players and turn order.

use super::{ConfigError, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Seat index in turn order, starting at 0.
    seat: usize,
    /// Display name.
    name: String,
    /// Mark placed by this player.
    symbol: Symbol,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Ordered, cyclic list of players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Seats one player per distinct symbol.
    ///
    /// Empty symbol entries are dropped and repeated symbols collapse to
    /// their first occurrence. Names are handed out by seat; a missing or
    /// blank name becomes `Player <seat number>`.
    ///
    /// Fails with [`ConfigError::NotPlayable`] unless there are at least
    /// two distinct symbols, no more distinct names than symbols, and
    /// every symbol is a single printable character.
    #[instrument(skip_all, fields(names = names.len(), symbols = symbols.len()))]
    pub fn build(names: &[Option<String>], symbols: &[String]) -> Result<Self, ConfigError> {
        let mut distinct: Vec<&str> = Vec::new();
        for raw in symbols.iter().map(String::as_str).filter(|s| !s.is_empty()) {
            if !distinct.contains(&raw) {
                distinct.push(raw);
            }
        }

        if distinct.len() < 2 {
            return Err(ConfigError::NotPlayable(
                "at least two distinct symbols are required".to_string(),
            ));
        }

        let given = |seat: usize| {
            names
                .get(seat)
                .and_then(Option::as_deref)
                .filter(|name| !name.trim().is_empty())
        };

        let mut distinct_names: Vec<&str> = (0..names.len()).filter_map(given).collect();
        distinct_names.sort_unstable();
        distinct_names.dedup();
        if distinct_names.len() > distinct.len() {
            return Err(ConfigError::NotPlayable(format!(
                "{} player names for {} symbols",
                distinct_names.len(),
                distinct.len()
            )));
        }

        let symbols = distinct
            .iter()
            .map(|raw| {
                Symbol::parse(raw).ok_or_else(|| {
                    ConfigError::NotPlayable(format!(
                        "symbol '{}' must be a single printable character",
                        raw
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let players: Vec<Player> = symbols
            .into_iter()
            .enumerate()
            .map(|(seat, symbol)| {
                let name = given(seat)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Player {}", seat + 1));
                debug!(seat, %name, %symbol, "Seating player");
                Player { seat, name, symbol }
            })
            .collect();

        info!(players = players.len(), "Roster built");
        Ok(Self { players })
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of seated players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if no player is seated.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the player in `seat`.
    pub fn get(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Seat that moves after `seat`, wrapping to the first.
    pub fn next_seat(&self, seat: usize) -> usize {
        (seat + 1) % self.players.len()
    }

    /// Endless turn order starting from the first seat.
    pub fn turns(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().cycle()
    }

    /// Finds the player who owns `symbol`.
    pub fn by_symbol(&self, symbol: Symbol) -> Option<&Player> {
        self.players.iter().find(|p| p.symbol == symbol)
    }
}
