//! Pure tic-tac-toe engine: board state, turn order, win and tie rules.
//!
//! Nothing in this module touches a terminal. The presentation layer
//! in [`crate::widget`] drives the engine and renders the result.

mod action;
mod engine;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use engine::Game;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
