//! Stateless UI rendering for N×N tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_core::{Cell, GameState, GridSize, Mark, Outcome};

use super::app::App;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Screen regions, top to bottom.
struct Regions {
    title: Rect,
    sizes: Rect,
    board: Rect,
    turn: Rect,
    status: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Size selector
            Constraint::Min(9),    // Board
            Constraint::Length(1), // Turn indicator
            Constraint::Length(3), // Status
        ])
        .split(area);

    Regions {
        title: chunks[0],
        sizes: chunks[1],
        board: chunks[2],
        turn: chunks[3],
        status: chunks[4],
    }
}

/// Returns the on-screen rectangle of every cell, in row-major order.
pub fn cell_rects(area: Rect, size: GridSize) -> Vec<Rect> {
    let side = size.side() as u16;
    let board = center_rect(regions(area).board, CELL_WIDTH * side, CELL_HEIGHT * side);

    (0..side)
        .flat_map(|row| (0..side).map(move |col| (row, col)))
        .map(|(row, col)| {
            Rect::new(
                board.x + col * CELL_WIDTH,
                board.y + row * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        })
        .collect()
}

/// Finds the cell under a screen position, for mouse clicks.
pub fn cell_at(area: Rect, size: GridSize, column: u16, row: u16) -> Option<usize> {
    cell_rects(area, size)
        .iter()
        .position(|rect| rect.contains(Position::new(column, row)))
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let regions = regions(area);
    let game = app.game();

    let title = Paragraph::new("TIC-TAC-TOE")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, regions.title);

    draw_size_selector(frame, regions.sizes, game.grid_size());
    draw_board(frame, area, game, app.cursor());
    draw_turn(frame, regions.turn, game.turn());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" arrows move · enter place · r reset · 3/4/5 size · q quit "),
        );
    frame.render_widget(status, regions.status);

    if game.outcome().is_finished() {
        draw_overlay(frame, area, game.outcome());
    }
}

fn draw_size_selector(frame: &mut Frame, area: Rect, current: GridSize) {
    let mut spans = vec![Span::raw("Grid size: ")];
    for size in GridSize::iter() {
        let style = if size == current {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", size), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_board(frame: &mut Frame, area: Rect, game: &GameState, cursor: usize) {
    let size = game.grid_size();
    let winning = game.winning_line();

    for (index, rect) in cell_rects(area, size).into_iter().enumerate() {
        let cell = game.board().get(index).unwrap_or_default();
        let on_winning_line = winning.is_some_and(|line| line.contains(size, index));

        let (symbol, mut style) = match cell {
            Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
            Cell::Occupied(Mark::X) => ("X", mark_style(Mark::X)),
            Cell::Occupied(Mark::O) => ("O", mark_style(Mark::O)),
        };
        if on_winning_line {
            style = style.bg(Color::Green).fg(Color::Black);
        }

        let border = if index == cursor && !game.outcome().is_finished() {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = Paragraph::new(Span::styled(symbol, style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(paragraph, rect);
    }
}

/// Shows both marks with the one to move highlighted.
fn draw_turn(frame: &mut Frame, area: Rect, turn: Mark) {
    let badge = |mark: Mark| {
        let style = if mark == turn {
            mark_style(mark).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", mark), style)
    };
    let line = Line::from(vec![
        Span::raw("Turn: "),
        badge(Mark::X),
        Span::raw(" "),
        badge(Mark::O),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_overlay(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let (headline, style) = match outcome {
        Outcome::Won(mark) => (format!("{} wins!", mark), mark_style(mark)),
        Outcome::Draw => (
            "Draw!".to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Outcome::InProgress => return,
    };

    let popup = center_rect(area, 30, 5);
    let text = vec![
        Line::from(Span::styled(headline, style)),
        Line::from(""),
        Line::from("Press 'r' to play again"),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Game over ")),
        popup,
    );
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_title_and_sizes() {
        let screen = render(&App::new(GridSize::Four));
        assert!(screen.contains("TIC-TAC-TOE"));
        assert!(screen.contains("3x3"));
        assert!(screen.contains("4x4"));
        assert!(screen.contains("5x5"));
        assert!(!screen.contains("Game over"));
    }

    #[test]
    fn test_overlay_on_win() {
        let mut app = App::new(GridSize::Three);
        for index in [0, 3, 1, 4, 2] {
            app.apply(Action::PlaceAt(index));
        }
        let screen = render(&app);
        assert!(screen.contains("Game over"));
        assert!(screen.contains("X wins!"));
    }

    #[test]
    fn test_overlay_on_draw() {
        let mut app = App::new(GridSize::Three);
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            app.apply(Action::PlaceAt(index));
        }
        assert!(render(&app).contains("Draw!"));
    }

    #[test]
    fn test_cell_rects_cover_board() {
        let area = Rect::new(0, 0, 60, 30);
        for size in GridSize::iter() {
            let rects = cell_rects(area, size);
            assert_eq!(rects.len(), size.cell_count());
            assert!(rects.iter().all(|r| r.width == CELL_WIDTH && r.height == CELL_HEIGHT));
        }
    }

    #[test]
    fn test_cell_at_hits_each_cell() {
        let area = Rect::new(0, 0, 60, 30);
        let rects = cell_rects(area, GridSize::Three);
        for (index, rect) in rects.iter().enumerate() {
            assert_eq!(cell_at(area, GridSize::Three, rect.x + 1, rect.y + 1), Some(index));
        }
        assert_eq!(cell_at(area, GridSize::Three, 0, 0), None);
    }
}
