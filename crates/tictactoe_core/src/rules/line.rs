//! Rows, columns and diagonals of the board.

use crate::GridSize;
use serde::{Deserialize, Serialize};

/// A line of N cells checked for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `i`, left to right.
    Row(usize),
    /// Column `i`, top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Returns the cell indices of this line on a board of `size`.
    pub fn indices(self, size: GridSize) -> impl Iterator<Item = usize> {
        let n = size.side();
        (0..n).map(move |k| match self {
            Line::Row(i) => i * n + k,
            Line::Column(i) => k * n + i,
            Line::Diagonal => k * n + k,
            Line::AntiDiagonal => k * n + (n - 1 - k),
        })
    }

    /// All 2N+2 lines in scan order.
    ///
    /// Row `i` comes before column `i`, then the two diagonals.
    pub fn scan_order(size: GridSize) -> impl Iterator<Item = Line> {
        (0..size.side())
            .flat_map(|i| [Line::Row(i), Line::Column(i)])
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Checks whether `index` lies on this line.
    pub fn contains(self, size: GridSize, index: usize) -> bool {
        self.indices(size).any(|i| i == index)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(i) => write!(f, "row {}", i + 1),
            Line::Column(i) => write!(f, "column {}", i + 1),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}
