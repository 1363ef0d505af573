//! Consistency checks between the board, the move history, the turn
//! order and the live-line tracker.
//!
//! Each check is a zero-sized type implementing [`Invariant`]. Tuples of
//! checks form an [`InvariantSet`], which [`Game`](crate::Game) runs
//! after every accepted move in debug builds.

/// A property of `S` that every reachable state satisfies.
pub trait Invariant<S> {
    /// Returns false if `state` breaks the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A broken [`Invariant`], identified by its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Records a violation of the property described by `description`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked as one unit.
pub trait InvariantSet<S> {
    /// Runs every member check and returns all the ones that failed.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod live_lines;
pub mod monotonic_board;
pub mod round_robin;

pub use live_lines::LiveLinesInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use round_robin::RoundRobinInvariant;

/// The checks [`Game`](crate::Game) runs after each move.
pub type GameInvariants = (
    MonotonicBoardInvariant,
    RoundRobinInvariant,
    LiveLinesInvariant,
);
