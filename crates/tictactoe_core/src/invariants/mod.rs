//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every operation.
//! They are checked in debug builds after each accepted placement and can be
//! tested independently.

pub mod balanced_turn;
pub mod board_size;
pub mod fresh_outcome;

pub use balanced_turn::BalancedTurnInvariant;
pub use board_size::BoardSizeInvariant;
pub use fresh_outcome::FreshOutcomeInvariant;

use crate::GameState;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    BoardSizeInvariant,
    BalancedTurnInvariant,
    FreshOutcomeInvariant,
);

/// Panics in debug builds if any invariant is violated.
pub fn assert_invariants(game: &GameState) {
    let result = GameInvariants::check_all(game);
    debug_assert!(result.is_ok(), "Invariants violated: {:?}", result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GridSize, Mark};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        for size in [GridSize::Three, GridSize::Four, GridSize::Five] {
            assert!(GameInvariants::check_all(&GameState::new(size)).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::new(GridSize::Four);
        for index in [0, 5, 10, 3, 7] {
            game.place_mark(index).unwrap();
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::default();
        game.place_mark(4).unwrap();

        // Extra O plus a stale outcome.
        game.board.cells[0] = Cell::Occupied(Mark::O);
        game.board.cells[1] = Cell::Occupied(Mark::O);
        game.board.cells[2] = Cell::Occupied(Mark::O);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, BalancedTurnInvariant::description());
        assert_eq!(violations[1].description, FreshOutcomeInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (BoardSizeInvariant, FreshOutcomeInvariant);
        assert!(TwoInvariants::check_all(&GameState::default()).is_ok());
    }
}
