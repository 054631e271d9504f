//! tictactoe_grid - N-by-N tic-tac-toe in the terminal
//!
//! # Architecture
//!
//! - **Core**: game state and rules live in [`tictactoe_core`]
//! - **TUI**: interactive terminal front end driving a single game
//! - **Script**: non-interactive replay of cell indices
//! - **Config**: settings file plus environment overrides
//!
//! # Example
//!
//! ```
//! use tictactoe_grid::{replay, render_text};
//! use tictactoe_core::GridSize;
//!
//! let game = replay(GridSize::Three, &[0, 3, 1, 4, 2])?;
//! assert!(render_text(&game).contains("X wins"));
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod script;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GRID_SIZE_ENV, Settings};

// Crate-level exports - Logging
pub use logging::{init_file, init_stderr};

// Crate-level exports - Scripted play
pub use script::{render_json, render_text, replay};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, Direction, action_for, cell_at, draw, move_cursor, run_tui};
