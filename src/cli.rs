//! Command-line interface for tictactoe_grid.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::GridSize;

/// N-by-N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_grid")]
#[command(about = "N-by-N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = "tictactoe_grid.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Grid size to start with (3, 4 or 5)
        #[arg(short, long)]
        size: Option<GridSize>,
    },

    /// Replay a list of cell indices and print the result
    Play {
        /// Grid size (3, 4 or 5)
        #[arg(short, long)]
        size: Option<GridSize>,

        /// Comma-separated cell indices, row-major from 0
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from([
            "tictactoe_grid",
            "play",
            "--size",
            "4",
            "--moves",
            "0,5,10",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Play { size, moves, json } => {
                assert_eq!(size, Some(GridSize::Four));
                assert_eq!(moves, vec![0, 5, 10]);
                assert!(json);
            }
            Command::Tui { .. } => panic!("Expected play command"),
        }
        assert_eq!(cli.config, PathBuf::from("tictactoe_grid.toml"));
    }

    #[test]
    fn test_rejects_bad_size() {
        assert!(Cli::try_parse_from(["tictactoe_grid", "tui", "--size", "6"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
