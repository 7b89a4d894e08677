//! The game engine: a single owned state machine over the board.
//!
//! `InProgress -> Won(player) | Tied`, with [`Game::reset`] as the only
//! way out of a terminal status.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Tic-tac-toe state machine.
///
/// Owns the board, the player to move, the status, and the move
/// history. The only mutating operations are [`Game::apply`] and
/// [`Game::reset`]; both keep the board invariant that the X-count
/// minus the O-count is 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is. Meaningful only while the game is
    /// in progress; frozen at the last mover once it ends.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Where the game stands.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted moves, in order. Rejected moves never appear here.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Positions still open for play.
    pub fn vacant(&self) -> Vec<Position> {
        Position::iter()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }

    /// Places the current player's mark at `position`.
    ///
    /// On success the status is re-evaluated (win scan, then tie scan)
    /// and the turn passes to the opponent only if the game is still in
    /// progress. Returns the status after the move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended and
    /// [`MoveError::SquareOccupied`] for a square that already holds a
    /// mark. Rejected moves leave the game untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.current_player;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));

        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Tied;
        } else {
            self.current_player = player.opponent();
        }

        Ok(self.status)
    }

    /// Returns the game to its initial state from any status.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let game = Game::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.vacant().len(), 9);
    }

    #[test]
    fn test_turn_passes_after_valid_move() {
        let mut game = Game::new();
        let status = game.apply(Position::Center).expect("valid move");
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected_without_side_effects() {
        let mut game = Game::new();
        game.apply(Position::Center).expect("valid move");
        let before = game.clone();

        let result = game.apply(Position::Center);
        assert_eq!(
            result,
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_reset_from_mid_game() {
        let mut game = Game::new();
        game.apply(Position::Center).expect("valid move");
        game.apply(Position::TopLeft).expect("valid move");

        game.reset();
        assert_eq!(game, Game::new());
    }
}
