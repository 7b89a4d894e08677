//! Widget state: the game plus everything the renderer needs.

use crate::config::WidgetConfig;
use crate::game::{Game, GameStatus, Position};
use derive_getters::Getters;
use tracing::{debug, info};

use super::input::{move_cursor, Action};

const START_MESSAGE: &str = "Player X's turn. Click a cell or press 1-9.";

/// UI state for one widget session.
///
/// Translates input actions into engine calls and engine outcomes into
/// display state. Rejected moves are dropped silently here, matching
/// the original widget; the engine still reports them so the log and
/// the tests see an explicit rejection.
#[derive(Debug, Getters)]
pub struct App {
    config: WidgetConfig,
    game: Game,
    cursor: Position,
    status_message: String,
    /// Blocking end-of-game notice. While set, every input only
    /// acknowledges the notice, and acknowledging resets the game.
    notice: Option<String>,
}

impl App {
    /// Creates the widget state with the host-supplied configuration.
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            game: Game::new(),
            cursor: Position::Center,
            status_message: START_MESSAGE.to_string(),
            notice: None,
        }
    }

    /// Applies one input action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "handling input");

        if self.notice.is_some() {
            self.reset();
            return;
        }

        match action {
            Action::Quit | Action::Acknowledge => {}
            Action::Reset => self.reset(),
            Action::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Confirm => self.place(self.cursor),
            Action::Place(position) => {
                self.cursor = position;
                self.place(position);
            }
        }
    }

    /// Starts a fresh game.
    pub fn reset(&mut self) {
        debug!("resetting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.notice = None;
        self.status_message = START_MESSAGE.to_string();
    }

    fn place(&mut self, position: Position) {
        match self.game.apply(position) {
            Ok(GameStatus::InProgress) => {
                self.status_message = format!("Player {}'s turn", self.game.current_player());
            }
            Ok(GameStatus::Won(player)) => {
                info!(%player, "game won");
                self.status_message = format!("Player {player} wins!");
                self.notice = Some(format!("Player {player} wins the game!"));
            }
            Ok(GameStatus::Tied) => {
                info!("game tied");
                self.status_message = "It's a tie!".to_string();
                self.notice = Some("It's a tie!".to_string());
            }
            Err(err) => {
                // Dropped at the UI boundary; the log keeps the reason.
                debug!(%err, position = %position, "move ignored");
            }
        }
    }
}
