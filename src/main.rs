//! tictactoe_grid - Unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_core::GridSize;
use tictactoe_grid::{
    Cli, Command, Settings, init_file, init_stderr, render_json, render_text, replay, run_tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::from_file(&cli.config)?.with_env()?;

    // The filter comes from settings, so the subscriber goes in after loading.
    match &cli.command {
        Command::Tui { .. } => init_file(settings.log_file(), settings.log_filter())?,
        Command::Play { .. } => init_stderr(settings.log_filter()),
    }
    info!(
        config = %cli.config.display(),
        grid_size = %settings.grid_size(),
        log_filter = %settings.log_filter(),
        "Settings loaded"
    );

    match cli.command {
        Command::Tui { size } => run_tui(size.unwrap_or(*settings.grid_size())),
        Command::Play { size, moves, json } => {
            run_play(size.unwrap_or(*settings.grid_size()), &moves, json)
        }
    }
}

/// Replays moves and prints the result.
#[instrument(skip(moves))]
fn run_play(size: GridSize, moves: &[usize], json: bool) -> Result<()> {
    info!(moves = moves.len(), "Replaying moves");
    let game = replay(size, moves).context("Replay failed")?;

    if json {
        println!("{}", render_json(&game)?);
    } else {
        print!("{}", render_text(&game));
    }
    Ok(())
}
