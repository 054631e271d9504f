//! Game outcome and the phase derived from it.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Derived status of a game.
///
/// Never set directly; always recomputed from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and open cells remain.
    #[default]
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the phase corresponding to this outcome.
    pub fn phase(&self) -> Phase {
        if self.is_finished() {
            Phase::Finished
        } else {
            Phase::Playing
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Lifecycle phase of a game.
///
/// `Playing` moves to `Finished` on a win or draw, and back to `Playing`
/// only through a reset or size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Placements are accepted.
    Playing,
    /// Placements are ignored until reset.
    Finished,
}
