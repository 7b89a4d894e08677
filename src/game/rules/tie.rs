//! Tie detection.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Returns true when every square holds a mark.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|square| *square != Square::Empty)
}

/// Returns true when the board is full and nobody completed a line.
#[instrument]
pub fn is_tied(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
