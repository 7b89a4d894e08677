//! Input translation: key presses and mouse clicks become widget actions.

use super::ui::Zones;
use crate::game::Position;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position as ScreenPoint;

/// What an input event asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the widget.
    Quit,
    /// Start a fresh game.
    Reset,
    /// Move the keyboard cursor one cell.
    Cursor(Direction),
    /// Place a mark at the cursor.
    Confirm,
    /// Place a mark at a specific cell.
    Place(Position),
    /// No direct effect; dismisses a pending notice.
    Acknowledge,
}

/// Cursor movement on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Maps a key press to an action.
///
/// Digits 1-9 address cells directly in row-major order, matching the
/// numbers shown on empty squares.
pub fn from_key(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Up => Action::Cursor(Direction::Up),
        KeyCode::Down => Action::Cursor(Direction::Down),
        KeyCode::Left => Action::Cursor(Direction::Left),
        KeyCode::Right => Action::Cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
        KeyCode::Char(c) if c.is_ascii_digit() => match c.to_digit(10) {
            Some(digit @ 1..=9) => Position::from_index(digit as usize - 1)
                .map(Action::Place)
                .unwrap_or(Action::Acknowledge),
            _ => Action::Acknowledge,
        },
        _ => Action::Acknowledge,
    }
}

/// Maps a left mouse press to the cell or control under it.
///
/// Clicks outside every hit zone are dropped, as are all other mouse
/// events (movement, drag, scroll).
pub fn from_mouse(mouse: &MouseEvent, zones: &Zones) -> Option<Action> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return None;
    }

    let point = ScreenPoint::new(mouse.column, mouse.row);
    if zones.reset.contains(point) {
        return Some(Action::Reset);
    }
    Position::ALL
        .iter()
        .copied()
        .find(|pos| zones.cells[pos.index()].contains(point))
        .map(Action::Place)
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
