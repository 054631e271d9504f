//! Fresh outcome invariant: the stored outcome matches the board.

use super::Invariant;
use crate::{rules, GameState};

/// Invariant: the stored outcome equals a fresh evaluation of the board.
pub struct FreshOutcomeInvariant;

impl Invariant<GameState> for FreshOutcomeInvariant {
    fn holds(game: &GameState) -> bool {
        game.outcome() == rules::evaluate(game.board())
    }

    fn description() -> &'static str {
        "Outcome reflects the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GridSize, Mark, Outcome};

    #[test]
    fn test_holds_after_win() {
        let mut game = GameState::new(GridSize::Three);
        for index in [0, 3, 1, 4, 2] {
            game.place_mark(index).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Won(Mark::X));
        assert!(FreshOutcomeInvariant::holds(&game));
    }

    #[test]
    fn test_detects_stale_outcome() {
        let mut game = GameState::new(GridSize::Three);
        for index in [0, 1, 2] {
            game.board.cells[index] = Cell::Occupied(Mark::X);
        }
        assert!(!FreshOutcomeInvariant::holds(&game));
    }
}
