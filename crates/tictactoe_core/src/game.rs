//! Game state manager for N×N tic-tac-toe.
//!
//! Holds the board, the mark to move and the current outcome. Every mutation
//! goes through [`GameState::place_mark`], [`GameState::reset`] or
//! [`GameState::set_grid_size`], and the outcome is recomputed synchronously
//! before any of them returns.

use crate::error::{GameError, GameErrorKind};
use crate::rules::{self, Line};
use crate::snapshot::Snapshot;
use crate::{Board, Cell, GridSize, Mark, Outcome, Phase};
use tracing::{debug, info, instrument};

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoreReason {
    /// The cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The game has finished.
    #[display("game is already over")]
    GameOver,
}

/// Result of a placement request.
///
/// Ignored placements are normal play (clicking a filled cell), not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The mark was placed.
    Placed {
        /// Cell that received the mark.
        index: usize,
        /// Mark that was placed.
        mark: Mark,
        /// Outcome after the placement.
        outcome: Outcome,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl Placement {
    /// Returns true if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) outcome: Outcome,
}

impl GameState {
    /// Creates a new game on an empty board of the given size.
    #[instrument]
    pub fn new(size: GridSize) -> Self {
        Self {
            board: Board::new(size),
            turn: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that will be placed next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the grid size.
    pub fn grid_size(&self) -> GridSize {
        self.board.size()
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.outcome.phase()
    }

    /// Places the current mark at `index`.
    ///
    /// Occupied cells and finished games are ignored without touching any
    /// state. On success the turn passes to the other mark and the outcome
    /// is recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::IndexOutOfRange`] if `index` is not on the
    /// board. The state is left unchanged.
    #[instrument(skip(self), fields(turn = %self.turn, size = %self.grid_size()))]
    pub fn place_mark(&mut self, index: usize) -> Result<Placement, GameError> {
        let len = self.board.cell_count();
        let cell = self
            .board
            .get(index)
            .ok_or_else(|| GameError::new(GameErrorKind::IndexOutOfRange { index, len }))?;

        if self.outcome.is_finished() {
            debug!(index, outcome = %self.outcome, "Ignoring placement after game end");
            return Ok(Placement::Ignored(IgnoreReason::GameOver));
        }
        if !cell.is_empty() {
            debug!(index, "Ignoring placement on occupied cell");
            return Ok(Placement::Ignored(IgnoreReason::Occupied));
        }

        let mark = self.turn;
        self.board.set(index, Cell::Occupied(mark))?;
        self.turn = mark.opponent();
        self.outcome = self.compute_outcome();

        debug!(index, %mark, outcome = %self.outcome, "Mark placed");
        if self.outcome.is_finished() {
            info!(outcome = %self.outcome, "Game finished");
        }

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        Ok(Placement::Placed {
            index,
            mark,
            outcome: self.outcome,
        })
    }

    /// Computes the outcome of the current board.
    ///
    /// Pure: calling it any number of times without an intervening
    /// placement yields the same value.
    pub fn compute_outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Starts over on an empty board of `size`, with X to move.
    #[instrument(skip(self), fields(from = %self.grid_size()))]
    pub fn set_grid_size(&mut self, size: GridSize) {
        info!(to = %size, "Changing grid size");
        *self = Self::new(size);
    }

    /// Starts over on an empty board of the current size.
    #[instrument(skip(self), fields(size = %self.grid_size()))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new(self.grid_size());
    }

    /// Returns the line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.outcome {
            Outcome::Won(_) => rules::find_winning_line(&self.board).map(|(_, line)| line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the indices of all empty cells.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.board
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns a serializable view of the game for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}
