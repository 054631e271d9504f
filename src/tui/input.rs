//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::GridSize;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous row.
    Up,
    /// Next row.
    Down,
    /// Previous column.
    Left,
    /// Next column.
    Right,
}

/// A user intent decoded from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Move(Direction),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a specific cell (mouse click).
    PlaceAt(usize),
    /// Start over on the same grid.
    Reset,
    /// Start over on a specific grid size.
    SetSize(GridSize),
    /// Start over on the next grid size.
    CycleSize,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Move(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('s') => Action::CycleSize,
        KeyCode::Char('3') => Action::SetSize(GridSize::Three),
        KeyCode::Char('4') => Action::SetSize(GridSize::Four),
        KeyCode::Char('5') => Action::SetSize(GridSize::Five),
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one cell, staying put at the board edge.
pub fn move_cursor(cursor: usize, size: GridSize, direction: Direction) -> usize {
    let side = size.side();
    let (row, col) = (cursor / side, cursor % side);

    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(side - 1), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(side - 1)),
    };
    row * side + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_within_board() {
        assert_eq!(move_cursor(4, GridSize::Three, Direction::Up), 1);
        assert_eq!(move_cursor(4, GridSize::Three, Direction::Down), 7);
        assert_eq!(move_cursor(4, GridSize::Three, Direction::Left), 3);
        assert_eq!(move_cursor(4, GridSize::Three, Direction::Right), 5);
        assert_eq!(move_cursor(12, GridSize::Five, Direction::Down), 17);
    }

    #[test]
    fn test_move_clamps_at_edges() {
        assert_eq!(move_cursor(0, GridSize::Four, Direction::Up), 0);
        assert_eq!(move_cursor(0, GridSize::Four, Direction::Left), 0);
        assert_eq!(move_cursor(3, GridSize::Four, Direction::Right), 3);
        assert_eq!(move_cursor(15, GridSize::Four, Direction::Down), 15);
    }

    #[test]
    fn test_key_mapping() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(action_for(key(KeyCode::Enter)), Some(Action::PlaceAtCursor));
        assert_eq!(
            action_for(key(KeyCode::Char('4'))),
            Some(Action::SetSize(GridSize::Four))
        );
        assert_eq!(action_for(key(KeyCode::Char('x'))), None);
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }
}
