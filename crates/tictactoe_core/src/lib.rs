//! Pure N×N tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`GridSize`] and the row-major [`Board`]
//! - **Rules**: pure win/draw evaluation over any supported grid size
//! - **Game**: [`GameState`], the single state manager a front end drives
//! - **Invariants**: properties checked after every accepted placement
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, GridSize, Mark, Outcome};
//!
//! let mut game = GameState::new(GridSize::Three);
//! for index in [0, 3, 1, 4, 2] {
//!     game.place_mark(index)?;
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Mark::X));
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod invariants;
mod phases;
pub mod rules;
mod snapshot;
mod types;

pub use error::{GameError, GameErrorKind};
pub use game::{GameState, IgnoreReason, Placement};
pub use phases::{Outcome, Phase};
pub use rules::Line;
pub use snapshot::Snapshot;
pub use types::{Board, Cell, GridSize, Mark};
