//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the state manager so they can be called for any board, including the
//! invariant checks.

pub mod draw;
pub mod line;
pub mod win;

pub use draw::{evaluate, is_full};
pub use line::Line;
pub use win::{check_winner, find_winning_line};
