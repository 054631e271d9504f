//! Board size invariant: the board always holds N² cells.

use super::Invariant;
use crate::GameState;

/// Invariant: board length equals the square of the grid side.
pub struct BoardSizeInvariant;

impl Invariant<GameState> for BoardSizeInvariant {
    fn holds(game: &GameState) -> bool {
        game.board().cell_count() == game.grid_size().cell_count()
    }

    fn description() -> &'static str {
        "Board holds exactly N*N cells"
    }
}
