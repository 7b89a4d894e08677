//! Move actions and the reasons the engine rejects them.

use super::position::Position;
use super::types::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
///
/// Recorded in the engine's history so a finished game can be
/// reconstructed move by move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// The player who made this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Where the mark was placed.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Why the engine refused a move.
///
/// The original widget swallowed invalid moves; the engine reports
/// them explicitly and leaves silent handling to the presentation
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position already holds a mark.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has ended; reset before playing again.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
