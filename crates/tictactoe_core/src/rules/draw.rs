//! Draw detection and full outcome evaluation.

use super::win::check_winner;
use crate::{Board, Outcome};
use tracing::instrument;

/// Checks if the board is full (every cell occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// Computes the outcome of a board.
///
/// A completed line wins; otherwise a full board is a draw. Pure and
/// deterministic, so repeated calls on the same board agree.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
