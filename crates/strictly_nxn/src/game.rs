//! Game engine: setup, turn order and outcomes.
//!
//! A game starts as a [`GameSetup`], which validates the board and the
//! roster, and becomes a [`Game`] once started. The game accepts moves
//! until a line is completed, no line can be completed any more, or the
//! presentation layer abandons it.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::{
    Board, ConfigError, Evaluation, GameConfig, Line, Player, Position, Roster, Symbol, WinTracker,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of a single accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The game goes on with the next player.
    Continue,
    /// The moving player completed a line.
    Win {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// No line can be completed any more.
    Draw,
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// No line could be completed.
    Draw,
    /// The game was abandoned before it was decided.
    Abandoned,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Win { player, .. } => Some(player),
            Outcome::Draw | Outcome::Abandoned => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { player, .. } => write!(f, "{} wins!", player.name()),
            Outcome::Draw => write!(f, "It's a draw."),
            Outcome::Abandoned => write!(f, "Forced to quit."),
        }
    }
}

/// Lifecycle phase of a started game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Accepting moves.
    InProgress,
    /// Terminal; no further moves are accepted.
    Finished(Outcome),
}

// ─────────────────────────────────────────────────────────────
//  Setup
// ─────────────────────────────────────────────────────────────

/// Validated game configuration, ready to start.
///
/// The board is always empty and every line is live.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
    roster: Roster,
}

impl GameSetup {
    /// Validates `config` and builds the board and roster.
    #[instrument(skip(config), fields(size = config.size, symbols = config.symbols.len()))]
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let board = Board::new(config.size)?;
        let roster = Roster::build(&config.names(), &config.symbols)?;
        Ok(Self { board, roster })
    }

    /// Returns the empty board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seated players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Starts the game with the first seat to move.
    #[instrument(skip(self))]
    pub fn start(self) -> Game {
        info!(
            size = self.board.size(),
            players = self.roster.len(),
            "Game started"
        );
        Game {
            tracker: WinTracker::new(self.board.size()),
            board: self.board,
            roster: self.roster,
            current: 0,
            history: Vec::new(),
            phase: Phase::InProgress,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Game
// ─────────────────────────────────────────────────────────────

/// A started game.
///
/// Owns its board, tracker and roster exclusively. Moves are processed
/// one at a time; a rejected move changes nothing and the same player
/// stays on turn.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    tracker: WinTracker,
    roster: Roster,
    /// Seat of the player to move (or who made the final move).
    current: usize,
    history: Vec<Move>,
    phase: Phase,
}

impl Game {
    /// Sets up and starts a game in one step.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(GameSetup::new(config)?.start())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns an owned copy of the grid for rendering.
    pub fn snapshot(&self) -> Vec<Vec<Option<Symbol>>> {
        self.board.snapshot()
    }

    /// Returns the live-line tracker.
    pub fn tracker(&self) -> &WinTracker {
        &self.tracker
    }

    /// Returns the seated players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns accepted moves in order.
    pub fn moves(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Player to move, or the player who made the final move once finished.
    pub fn current_player(&self) -> &Player {
        &self.roster.players()[self.current]
    }

    /// Returns true once the game accepts no more moves.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Returns the outcome of a finished game.
    pub fn result(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Finished(outcome) => Some(outcome),
            Phase::InProgress => None,
        }
    }

    /// Parses `<row>,<column>` (1-based) and plays it for the current player.
    #[instrument(skip(self), fields(seat = self.current))]
    pub fn submit_move(&mut self, raw: &str) -> Result<TurnOutcome, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::parse(raw, self.board.size()).inspect_err(|e| {
            debug!(error = %e, "Rejected input");
        })?;
        self.submit_position(pos)
    }

    /// Plays the current player's mark at a 0-based position.
    ///
    /// Either the whole move is applied or, on any error, the game is left
    /// exactly as it was.
    #[instrument(skip(self), fields(seat = self.current))]
    pub fn submit_position(&mut self, pos: Position) -> Result<TurnOutcome, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player().clone();
        let symbol = *player.symbol();
        self.board.place(pos, symbol)?;
        self.history.push(Move::new(self.current, pos));

        let outcome = match self.tracker.evaluate(&self.board, pos, symbol) {
            Evaluation::Won(line) => {
                info!(player = %player, %line, "Game won");
                self.phase = Phase::Finished(Outcome::Win {
                    player: player.clone(),
                    line,
                });
                TurnOutcome::Win { player, line }
            }
            Evaluation::Drawn => {
                info!(moves = self.history.len(), "Game drawn");
                self.phase = Phase::Finished(Outcome::Draw);
                TurnOutcome::Draw
            }
            Evaluation::Undecided => {
                self.current = self.roster.next_seat(self.current);
                TurnOutcome::Continue
            }
        };

        // Debug builds only: replays the history and rescans all 2n+2 lines,
        // so each move costs O(moves + n²) instead of O(n).
        #[cfg(debug_assertions)]
        if let Err(e) = self.check_invariants() {
            *self = before;
            return Err(e);
        }

        Ok(outcome)
    }

    /// Ends the game without a winner.
    ///
    /// Returns false if the game had already finished; a decided
    /// outcome is never replaced.
    #[instrument(skip(self))]
    pub fn abandon(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        info!(moves = self.history.len(), "Game abandoned");
        self.phase = Phase::Finished(Outcome::Abandoned);
        true
    }

    /// Verifies every game invariant, reporting violations as a move error.
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: usize, symbols: &[&str]) -> GameConfig {
        GameConfig {
            size,
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            player_names: Vec::new(),
        }
    }

    #[test]
    fn test_setup_rejects_bad_size() {
        assert_eq!(
            GameSetup::new(&config(2, &["x", "o"])).err(),
            Some(ConfigError::InvalidSize(2))
        );
    }

    #[test]
    fn test_setup_rejects_unplayable_roster() {
        assert!(matches!(
            Game::new(&config(3, &["x"])),
            Err(ConfigError::NotPlayable(_))
        ));
    }

    #[test]
    fn test_setup_is_empty_and_seated() {
        let setup = GameSetup::new(&config(4, &["x", "o", "+"])).unwrap();
        assert_eq!(setup.board().size(), 4);
        assert_eq!(setup.board().filled(), 0);
        assert_eq!(setup.roster().len(), 3);

        let game = setup.start();
        assert_eq!(game.phase(), &Phase::InProgress);
        assert_eq!(*game.current_player().seat(), 0);
    }

    #[test]
    fn test_phase_follows_result() {
        let mut game = Game::new(&config(3, &["x", "o"])).unwrap();
        for raw in ["1,1", "2,1", "1,2", "2,2"] {
            game.submit_move(raw).unwrap();
            assert_eq!(game.phase(), &Phase::InProgress);
        }
        game.submit_move("1,3").unwrap();
        assert!(matches!(
            game.phase(),
            Phase::Finished(Outcome::Win { line: Line::Row(0), .. })
        ));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_postcondition_rolls_back_move() {
        let mut game = Game::new(&config(3, &["x", "o"])).unwrap();
        game.submit_move("1,1").unwrap();
        game.submit_move("1,2").unwrap();
        // Row 1 now holds two symbols; a fresh tracker wrongly keeps it live.
        game.tracker = WinTracker::new(3);
        let before = game.clone();

        assert!(matches!(
            game.submit_move("3,3"),
            Err(MoveError::InvariantViolation(_))
        ));
        assert_eq!(game.board().get(Position::new(2, 2)), None);
        assert_eq!(game.snapshot(), before.snapshot());
        assert_eq!(game.moves(), before.moves());
        assert_eq!(game.phase(), &Phase::InProgress);
        assert_eq!(*game.current_player().seat(), 0);
        assert_eq!(game.tracker(), before.tracker());
    }

    #[test]
    fn test_turn_advances_only_on_accepted_move() {
        let mut game = Game::new(&config(3, &["x", "o"])).unwrap();
        assert_eq!(*game.current_player().seat(), 0);

        assert_eq!(game.submit_move("1,1"), Ok(TurnOutcome::Continue));
        assert_eq!(*game.current_player().seat(), 1);

        assert_eq!(
            game.submit_move("1,1"),
            Err(MoveError::CellOccupied(Position::new(0, 0)))
        );
        assert!(matches!(game.submit_move("one,two"), Err(MoveError::MalformedInput(_))));
        assert_eq!(game.submit_move("4,1"), Err(MoveError::OutOfRange { size: 3 }));
        assert_eq!(*game.current_player().seat(), 1);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_win_finishes_game() {
        let mut game = Game::new(&config(3, &["x", "o"])).unwrap();
        for raw in ["1,1", "2,1", "1,2", "2,2"] {
            assert_eq!(game.submit_move(raw), Ok(TurnOutcome::Continue));
        }
        let outcome = game.submit_move("1,3").unwrap();
        assert!(matches!(outcome, TurnOutcome::Win { line: Line::Row(0), .. }));
        assert!(game.is_finished());
        assert_eq!(
            game.result().and_then(Outcome::winner).map(Player::name).map(String::as_str),
            Some("Player 1")
        );
        // The winner stays current.
        assert_eq!(*game.current_player().seat(), 0);
        assert_eq!(game.submit_move("3,3"), Err(MoveError::GameOver));
    }

    #[test]
    fn test_abandon() {
        let mut game = Game::new(&GameConfig::default()).unwrap();
        game.submit_move("2,2").unwrap();
        assert!(game.abandon());
        assert_eq!(game.result(), Some(&Outcome::Abandoned));
        assert!(!game.abandon());
        assert_eq!(game.submit_move("1,1"), Err(MoveError::GameOver));
    }

    #[test]
    fn test_abandon_keeps_decided_outcome() {
        let mut game = Game::new(&config(3, &["x", "o"])).unwrap();
        for raw in ["1,1", "2,1", "2,2", "3,1", "3,3"] {
            game.submit_move(raw).unwrap();
        }
        assert!(game.result().and_then(Outcome::winner).is_some());
        assert!(!game.abandon());
        assert!(game.result().and_then(Outcome::winner).is_some());
    }

    #[test]
    fn test_invariants_hold_through_play() {
        let mut game = Game::new(&config(4, &["a", "b", "c"])).unwrap();
        for raw in ["1,1", "1,2", "1,3", "2,2", "3,3", "4,4"] {
            game.submit_move(raw).unwrap();
            assert_eq!(game.check_invariants(), Ok(()));
        }
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Draw.to_string(), "It's a draw.");
        assert_eq!(Outcome::Abandoned.to_string(), "Forced to quit.");
    }
}
