//! Balanced turn invariant: marks alternate starting with X.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: X leads O by zero or one mark, and the turn agrees.
///
/// The turn is X exactly when both marks have been placed equally often.
pub struct BalancedTurnInvariant;

impl Invariant<GameState> for BalancedTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);

        let expected = match x.checked_sub(o) {
            Some(0) => Mark::X,
            Some(1) => Mark::O,
            _ => return false,
        };
        game.turn() == expected
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, ...) and the turn matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GridSize};

    #[test]
    fn test_holds_through_a_game() {
        let mut game = GameState::new(GridSize::Three);
        assert!(BalancedTurnInvariant::holds(&game));
        for index in [4, 0, 8, 2, 6] {
            game.place_mark(index).unwrap();
            assert!(BalancedTurnInvariant::holds(&game));
        }
    }

    #[test]
    fn test_detects_wrong_turn() {
        let mut game = GameState::new(GridSize::Three);
        game.turn = Mark::O;
        assert!(!BalancedTurnInvariant::holds(&game));
    }

    #[test]
    fn test_detects_o_ahead() {
        let mut game = GameState::new(GridSize::Three);
        game.board.cells[0] = Cell::Occupied(Mark::O);
        assert!(!BalancedTurnInvariant::holds(&game));
    }
}
