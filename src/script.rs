//! Non-interactive play: replay cell indices and report the result.

use tictactoe_core::{GameError, GameState, GridSize, Outcome, Placement};
use tracing::{info, instrument, warn};

/// Replays `moves` on a fresh board of `size`.
///
/// Ignored placements (occupied cell, finished game) are logged and
/// skipped.
///
/// # Errors
///
/// Stops at the first index that is not on the board.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(size: GridSize, moves: &[usize]) -> Result<GameState, GameError> {
    let mut game = GameState::new(size);
    for (step, index) in moves.iter().copied().enumerate() {
        if let Placement::Ignored(reason) = game.place_mark(index)? {
            warn!(step, index, %reason, "Move skipped");
        }
    }
    info!(outcome = %game.outcome(), "Replay complete");
    Ok(game)
}

/// Renders the board and a status line as plain text.
pub fn render_text(game: &GameState) -> String {
    let status = match game.outcome() {
        Outcome::InProgress => format!("{} to move", game.turn()),
        Outcome::Won(mark) => match game.winning_line() {
            Some(line) => format!("{} wins ({})", mark, line),
            None => format!("{} wins", mark),
        },
        Outcome::Draw => "Draw".to_string(),
    };
    format!("{}\n\n{}\n", game.board(), status)
}

/// Renders the game snapshot as pretty-printed JSON.
pub fn render_json(game: &GameState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&game.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Mark;

    #[test]
    fn test_replay_skips_ignored_moves() {
        let game = replay(GridSize::Three, &[4, 4, 0]).unwrap();
        assert_eq!(game.empty_cells().len(), 7);
        assert_eq!(game.turn(), Mark::X);
    }

    #[test]
    fn test_replay_stops_on_bad_index() {
        assert!(replay(GridSize::Three, &[0, 9, 1]).is_err());
    }

    #[test]
    fn test_render_text_win() {
        let game = replay(GridSize::Three, &[0, 3, 1, 4, 2]).unwrap();
        let text = render_text(&game);
        assert!(text.starts_with(" X | X | X \n"));
        assert!(text.ends_with("X wins (row 1)\n"));
    }

    #[test]
    fn test_render_text_in_progress() {
        let game = replay(GridSize::Four, &[0]).unwrap();
        assert!(render_text(&game).ends_with("O to move\n"));
    }
}
