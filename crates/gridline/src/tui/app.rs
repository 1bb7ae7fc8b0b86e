//! Application state and logic.

use super::input::{Command, move_cursor};
use crate::celebration::Celebration;
use gridline_core::{Game, GameStatus, Placement};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, instrument};

/// Main application state.
pub struct App {
    game: Game,
    cursor: usize,
    notice: Option<String>,
    celebration: Rc<RefCell<Celebration>>,
    should_quit: bool,
}

impl App {
    /// Creates the application around `game`.
    ///
    /// The celebration is subscribed to the game so wins and restarts reach it.
    pub fn new(mut game: Game, celebration: Rc<RefCell<Celebration>>) -> Self {
        game.subscribe(celebration.clone());
        let size = game.grid().size();
        Self {
            cursor: (size / 2) * size + size / 2,
            game,
            notice: None,
            celebration,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell index under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Shared celebration effect.
    pub fn celebration(&self) -> &Rc<RefCell<Celebration>> {
        &self.celebration
    }

    /// Checks if the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a command from the keyboard.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Move(direction) => {
                self.cursor = move_cursor(self.cursor, self.game.grid().size(), direction);
            }
            Command::Place => self.place(),
            Command::Restart => {
                self.game.restart();
                self.notice = None;
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self) {
        match self.game.place_marker(self.cursor) {
            Ok(Placement::Rejected) => {
                let notice = match self.game.status() {
                    GameStatus::Won(_) => "The game is over. Press 'r' to play again.",
                    GameStatus::InProgress => "That cell is taken.",
                };
                debug!(notice, "Placement rejected");
                self.notice = Some(notice.to_string());
            }
            Ok(Placement::Continue | Placement::Won(_)) => self.notice = None,
            Err(e) => {
                error!(error = %e, "Cursor left the grid");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Advances animations by one frame.
    pub fn tick(&mut self) {
        self.celebration.borrow_mut().tick();
    }

    /// Text for the status line.
    pub fn status_line(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        match self.game.status() {
            GameStatus::Won(winner) => {
                format!("{} wins! Press 'r' to restart or 'q' to quit.", winner)
            }
            GameStatus::InProgress if self.game.is_stalemate() => {
                "No lines left to win. Press 'r' to restart.".to_string()
            }
            GameStatus::InProgress => format!("{} to move", self.game.turn()),
        }
    }
}
