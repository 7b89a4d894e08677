//! Morpion: a terminal tic-tac-toe widget.
//!
//! The crate splits into a pure engine and a thin presentation layer:
//!
//! - [`game`]: board, turn order, win and tie rules. No I/O.
//! - [`widget`]: ratatui rendering, mouse and keyboard input, the reset
//!   control and the end-of-game notice.
//! - [`WidgetConfig`]: the host-supplied configuration, passed to the
//!   widget explicitly at construction.
//!
//! # Example
//!
//! ```
//! use morpion::{Game, GameStatus, Position};
//!
//! let mut game = Game::new();
//! game.apply(Position::Center)?;
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), morpion::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod game;
pub mod widget;

pub use config::{ConfigError, WidgetConfig};
pub use game::{Board, Game, GameStatus, Move, MoveError, Player, Position, Square};
