//! Terminal UI for tictactoe_grid.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Direction, action_for, move_cursor};
pub use ui::{cell_at, draw};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Write};
use tictactoe_core::GridSize;
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// Expects logging to go to a file; see [`crate::init_file`].
pub fn run_tui(size: GridSize) -> Result<()> {
    info!(%size, "Starting TUI");

    let mut stdout = io::stdout();
    enter_terminal(&mut stdout)?;
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = leave_terminal(&mut io::stdout());
            return Err(e.into());
        }
    };

    let res = event_loop(&mut terminal, App::new(size));

    leave_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Switches to raw mode and the alternate screen.
///
/// Undoes raw mode if the screen switch fails.
fn enter_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
        let _ = leave_terminal(out);
        return Err(e);
    }
    Ok(())
}

/// Restores the terminal. Safe to call when raw mode was never enabled.
fn leave_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

/// Draws, then blocks for one input event, until the app stops running.
#[instrument(skip_all)]
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut area = Rect::default();

    while app.is_running() {
        terminal.draw(|frame| {
            area = frame.area();
            ui::draw(frame, &app);
        })?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => input::action_for(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                ui::cell_at(area, app.game().grid_size(), mouse.column, mouse.row)
                    .map(Action::PlaceAt)
            }
            _ => None,
        };

        if let Some(action) = action {
            debug!(?action, "Input");
            app.apply(action);
        }
    }

    Ok(())
}
