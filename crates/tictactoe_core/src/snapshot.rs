//! Read-only, serializable view of a game for presentation layers.

use crate::rules::Line;
use crate::{Cell, GameState, GridSize, Mark, Outcome};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid size.
    pub grid_size: GridSize,
    /// Cells in row-major order.
    pub cells: Vec<Cell>,
    /// Mark to move next.
    pub turn: Mark,
    /// Current outcome.
    pub outcome: Outcome,
    /// Line that decided a win.
    pub winning_line: Option<Line>,
}

impl From<&GameState> for Snapshot {
    fn from(game: &GameState) -> Self {
        Self {
            grid_size: game.grid_size(),
            cells: game.board().cells().to_vec(),
            turn: game.turn(),
            outcome: game.outcome(),
            winning_line: game.winning_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let mut game = GameState::default();
        game.place_mark(0).unwrap();

        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["grid_size"], 3);
        assert_eq!(json["cells"][0], "X");
        assert_eq!(json["cells"][1], serde_json::Value::Null);
        assert_eq!(json["turn"], "O");
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["winning_line"], serde_json::Value::Null);
    }

    #[test]
    fn test_snapshot_reports_winner() {
        let mut game = GameState::default();
        for index in [0, 3, 1, 4, 2] {
            game.place_mark(index).unwrap();
        }
        let snapshot = game.snapshot();
        assert_eq!(snapshot.outcome, Outcome::Won(Mark::X));
        assert_eq!(snapshot.winning_line, Some(Line::Row(0)));

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
