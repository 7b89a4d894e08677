//! Stateless rendering for the widget.
//!
//! Layout geometry lives in [`zones`], a pure function over the frame
//! area, so rendering and mouse hit-testing always agree on where the
//! cells and the reset button are.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::app::App;
use crate::game::{Player, Position, Square};

/// Grid footprint: 3 cells of 7x3 plus 1-wide separators.
const GRID_WIDTH: u16 = 23;
const GRID_HEIGHT: u16 = 11;
const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

const MIN_WIDTH: u16 = GRID_WIDTH + 2;
const MIN_HEIGHT: u16 = 20;

/// Screen regions the widget renders into and binds input to.
#[derive(Debug, Clone, Default)]
pub struct Zones {
    /// Title line.
    pub title: Rect,
    /// Host-configured description text.
    pub description: Rect,
    /// The whole board grid.
    pub grid: Rect,
    /// One rectangle per cell, indexed by flat position index.
    pub cells: [Rect; 9],
    /// Status line.
    pub status: Rect,
    /// The reset button.
    pub reset: Rect,
}

/// Computes the widget's screen regions for the given frame area.
pub fn zones(area: Rect) -> Zones {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(GRID_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let grid = center_rect(chunks[2], GRID_WIDTH, GRID_HEIGHT);
    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        cells[pos.index()] = Rect::new(
            grid.x + pos.col() as u16 * (CELL_WIDTH + 1),
            grid.y + pos.row() as u16 * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        );
    }

    Zones {
        title: chunks[0],
        description: chunks[1],
        grid,
        cells,
        status: chunks[3],
        reset: center_rect(chunks[4], 15, 3),
    }
}

/// Renders the whole widget.
pub fn draw(frame: &mut Frame, app: &App, zones: &Zones) {
    let area = frame.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small: need at least {MIN_WIDTH}x{MIN_HEIGHT}"
        ))
        .alignment(Alignment::Center);
        frame.render_widget(warning, area);
        return;
    }

    let title = Paragraph::new("Morpion")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, zones.title);

    let description = Paragraph::new(app.config().description().as_str())
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(description, zones.description);

    draw_grid(frame, app, zones);

    let status = Paragraph::new(app.status_message().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, zones.status);

    let reset = Paragraph::new("Reset")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Green));
    frame.render_widget(reset, zones.reset);

    if let Some(message) = app.notice() {
        draw_notice(frame, area, message);
    }
}

fn draw_grid(frame: &mut Frame, app: &App, zones: &Zones) {
    let sep_style = Style::default().fg(Color::DarkGray);

    for row in 0..3u16 {
        for offset in [CELL_WIDTH, 2 * CELL_WIDTH + 1] {
            let sep = Rect::new(
                zones.grid.x + offset,
                zones.grid.y + row * (CELL_HEIGHT + 1),
                1,
                CELL_HEIGHT,
            );
            frame.render_widget(Paragraph::new("│\n│\n│").style(sep_style), sep);
        }
    }
    for offset in [CELL_HEIGHT, 2 * CELL_HEIGHT + 1] {
        let sep = Rect::new(zones.grid.x, zones.grid.y + offset, GRID_WIDTH, 1);
        frame.render_widget(
            Paragraph::new("───────┼───────┼───────").style(sep_style),
            sep,
        );
    }

    for pos in Position::ALL {
        draw_cell(frame, zones.cells[pos.index()], app, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, style) = match app.game().board().get(pos) {
        Square::Empty => (
            (pos.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // Cursor highlight is suppressed while the notice blocks the board.
    let style = if pos == *app.cursor() && app.notice().is_none() {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };

    // Leading blank line centers the mark vertically in the cell.
    let cell = Paragraph::new(format!("\n{symbol}"))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_notice(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 36, 5);
    frame.render_widget(Clear, popup);

    let paragraph = Paragraph::new(format!("{message}\n\nPress any key to play again"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title("Game over").borders(Borders::ALL));
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vertical[1])[1]
}
