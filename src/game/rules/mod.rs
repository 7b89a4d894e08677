//! Rules for evaluating a board.
//!
//! Pure functions over [`Board`](super::Board), separated from board
//! storage so the engine and tests can evaluate positions directly.

pub mod tie;
pub mod win;

pub use tie::{is_full, is_tied};
pub use win::check_winner;
