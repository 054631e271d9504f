//! Core domain types for N×N tic-tac-toe.

use crate::error::{GameError, GameErrorKind};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The symbol a player places in a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Cell> for Option<Mark> {
    fn from(cell: Cell) -> Self {
        cell.mark()
    }
}

/// Supported board dimensions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSize {
    /// 3×3 board.
    #[default]
    Three,
    /// 4×4 board.
    Four,
    /// 5×5 board.
    Five,
}

impl GridSize {
    /// Side length of the board.
    pub fn side(self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
        }
    }

    /// Number of cells on the board.
    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Returns the next supported size, wrapping around to the smallest.
    pub fn next(self) -> Self {
        GridSize::iter()
            .cycle()
            .skip_while(|size| *size != self)
            .nth(1)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

impl TryFrom<usize> for GridSize {
    type Error = GameError;

    #[track_caller]
    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            3 => Ok(GridSize::Three),
            4 => Ok(GridSize::Four),
            5 => Ok(GridSize::Five),
            other => Err(GameError::new(GameErrorKind::UnsupportedGridSize(other))),
        }
    }
}

impl TryFrom<u8> for GridSize {
    type Error = GameError;

    #[track_caller]
    fn try_from(side: u8) -> Result<Self, Self::Error> {
        GridSize::try_from(usize::from(side))
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        match size {
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
        }
    }
}

impl std::str::FromStr for GridSize {
    type Err = GameError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || GameError::new(GameErrorKind::InvalidGridSize(trimmed.to_string()));

        // Either "N" or "NxN" with equal sides.
        let sides = trimmed
            .split(['x', 'X'])
            .map(|part| part.parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match sides.as_slice() {
            [side] => GridSize::try_from(*side),
            [rows, cols] if rows == cols => GridSize::try_from(*rows),
            _ => Err(invalid()),
        }
    }
}

/// N×N board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: GridSize,
    pub(crate) cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the grid size.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the number of cells (N²).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_open(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Converts (row, col) to a cell index.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size.side() + col
    }

    /// Converts a cell index to (row, col).
    pub fn coords(&self, index: usize) -> (usize, usize) {
        let side = self.size.side();
        (index / side, index % side)
    }

    /// Sets the cell at the given index.
    #[track_caller]
    pub(crate) fn set(&mut self, index: usize, cell: Cell) -> Result<(), GameError> {
        let len = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or_else(|| GameError::new(GameErrorKind::IndexOutOfRange { index, len }))?;
        *slot = cell;
        Ok(())
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as text; empty cells show their index.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = self.size.side();
        let width = (self.cells.len() - 1).to_string().len();
        let separator = vec!["-".repeat(width + 2); side].join("+");

        for row in 0..side {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            for col in 0..side {
                let index = self.index_of(row, col);
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[index] {
                    Cell::Empty => write!(f, " {index:>width$} ")?,
                    Cell::Occupied(mark) => {
                        let mark = mark.to_string();
                        write!(f, " {mark:>width$} ")?
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}
