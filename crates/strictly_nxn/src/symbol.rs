//! Player marks.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single-character mark placed on the board.
///
/// Symbols are one printable ASCII character, so every cell renders
/// at the same width regardless of how many players are seated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(char);

impl Symbol {
    /// Parses a symbol from its textual form.
    ///
    /// Returns `None` unless `raw` is exactly one printable ASCII character.
    #[instrument]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Wraps a character, rejecting whitespace, control and non-ASCII characters.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_graphic().then_some(Self(c))
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| format!("'{}' is not a single printable character", raw))
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0.to_string()
    }
}
