//! Win detection for any supported grid size.

use super::Line;
use crate::{Board, Cell, Mark};
use tracing::instrument;

/// Returns the mark owning `line`, if every cell on it holds that mark.
///
/// A line is won when it holds exactly one distinct value and that value
/// is not empty.
pub fn line_owner(board: &Board, line: Line) -> Option<Mark> {
    let mut cells = line
        .indices(board.size())
        .map(|index| board.get(index).unwrap_or(Cell::Empty));
    let first = cells.next()?;
    let mark = first.mark()?;
    cells.all(|cell| cell == first).then_some(mark)
}

/// Finds the first completed line in scan order.
///
/// Only one line can complete per move in an alternating game, so the scan
/// order matters only for boards built by hand.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn find_winning_line(board: &Board) -> Option<(Mark, Line)> {
    Line::scan_order(board.size())
        .find_map(|line| line_owner(board, line).map(|mark| (mark, line)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has N in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    find_winning_line(board).map(|(mark, _)| mark)
}
