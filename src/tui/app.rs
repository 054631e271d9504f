//! Application state and logic.

use super::input::{move_cursor, Action};
use tictactoe_core::{GameState, GridSize, Outcome, Placement};
use tracing::{debug, error, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: usize,
    status_message: String,
    running: bool,
}

impl App {
    /// Creates a new application with a fresh game of `size`.
    pub fn new(size: GridSize) -> Self {
        Self {
            game: GameState::new(size),
            cursor: center(size),
            status_message: "X moves first.".to_string(),
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the cursor cell index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns false once the user has asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Move(direction) => {
                self.cursor = move_cursor(self.cursor, self.game.grid_size(), direction);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::PlaceAt(index) => {
                self.cursor = index;
                self.place(index);
            }
            Action::Reset => {
                self.game.reset();
                self.status_message = "New game. X moves first.".to_string();
            }
            Action::SetSize(size) => self.resize(size),
            Action::CycleSize => self.resize(self.game.grid_size().next()),
            Action::Quit => {
                debug!("Quit requested");
                self.running = false;
            }
        }
    }

    fn place(&mut self, index: usize) {
        match self.game.place_mark(index) {
            Ok(Placement::Placed { mark, outcome, .. }) => {
                let (row, col) = self.game.board().coords(index);
                self.status_message = match outcome {
                    Outcome::InProgress => format!(
                        "{} played row {}, column {}. {} to move.",
                        mark,
                        row + 1,
                        col + 1,
                        self.game.turn()
                    ),
                    Outcome::Won(winner) => format!("{} wins! Press 'r' to play again.", winner),
                    Outcome::Draw => "Draw! Press 'r' to play again.".to_string(),
                };
            }
            Ok(Placement::Ignored(reason)) => {
                self.status_message = format!("Can't play there: {}.", reason);
            }
            Err(e) => {
                // Cursor and clicks only produce on-board indices.
                error!(error = %e, "Placement rejected");
                self.status_message = e.kind().to_string();
            }
        }
    }

    fn resize(&mut self, size: GridSize) {
        self.game.set_grid_size(size);
        self.cursor = center(size);
        self.status_message = format!("Grid set to {}. X moves first.", size);
    }
}

/// Index of the center cell (upper-left of center on even sides).
fn center(size: GridSize) -> usize {
    let mid = (size.side() - 1) / 2;
    mid * size.side() + mid
}
