//! Error types for contract violations by the caller.
//!
//! Ordinary rejected moves (occupied cell, finished game) are not errors;
//! see [`Placement::Ignored`](crate::Placement::Ignored).

use derive_more::{Display, Error};

/// Specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// A cell index outside the board.
    #[display("Cell index {} out of bounds (board has {} cells)", index, len)]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// A grid size outside the supported set.
    #[display("Unsupported grid size {} (expected 3, 4 or 5)", _0)]
    UnsupportedGridSize(usize),

    /// Text that is not a grid size such as `4` or `4x4`.
    #[display("Invalid grid size {:?} (expected N or NxN)", _0)]
    InvalidGridSize(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
