//! Game engine for the line game.
//!
//! The engine is the only mutator of game state. Commands run to
//! completion, then the resulting [`GameEvent`] is handed to subscribed
//! handlers.

use crate::config::GameConfig;
use crate::events::{EventDispatcher, GameEvent, GameEventHandler};
use crate::geometry::Line;
use crate::grid::{Grid, GridError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::types::{GameStatus, Placement, PlayerId};
use tracing::{debug, error, info, instrument};

/// One game session: the grid, whose turn it is, and the status.
#[derive(Debug)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) grid: Grid,
    pub(crate) turn: PlayerId,
    pub(crate) status: GameStatus,
    events: EventDispatcher,
}

impl Game {
    /// Creates a fresh game: empty grid, player 1 to move.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        info!(
            grid_size = config.grid_size(),
            player_count = config.player_count(),
            "New game"
        );
        Self {
            grid: Grid::new(*config.grid_size()),
            config,
            turn: PlayerId::FIRST,
            status: GameStatus::InProgress,
            events: EventDispatcher::new(),
        }
    }

    /// Adds a collaborator that reacts to game events.
    pub fn subscribe(&mut self, handler: impl GameEventHandler + 'static) {
        self.events.subscribe(handler);
    }

    /// Returns the game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player to move next.
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the line that decided a won game.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(_) => rules::winning_line(&self.grid).map(|(line, _)| line),
        }
    }

    /// Checks if the grid is full with nobody winning.
    pub fn is_stalemate(&self) -> bool {
        self.status.is_in_progress() && rules::is_stalemate(&self.grid)
    }

    /// Places the current player's marker at `index`.
    ///
    /// Occupied cells and placements after a win are routine and come back
    /// as [`Placement::Rejected`] with nothing changed and no event.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `index` is not on the grid.
    #[instrument(skip(self), fields(turn = %self.turn, status = %self.status))]
    pub fn place_marker(&mut self, index: usize) -> Result<Placement, GridError> {
        let cell = self.grid.cell_at(index)?;

        if !self.status.is_in_progress() {
            debug!("Game is already over, placement rejected");
            return Ok(Placement::Rejected);
        }
        if !cell.is_empty() {
            debug!(?cell, "Cell is occupied, placement rejected");
            return Ok(Placement::Rejected);
        }

        let player = self.turn;
        let grid = self.grid.with_marker(index, player)?;

        let (placement, event) = match rules::check_winner(&grid) {
            Some(winner) => {
                info!(%winner, "Line completed");
                self.status = GameStatus::Won(winner);
                (Placement::Won(winner), GameEvent::GameWon(winner))
            }
            None => {
                self.turn = player.next(*self.config.player_count());
                debug!(%player, next = %self.turn, "Marker placed");
                (Placement::Continue, GameEvent::MoveAccepted)
            }
        };
        self.grid = grid;

        self.check_invariants();
        self.events.dispatch(&event);
        Ok(placement)
    }

    /// Discards the current grid and starts over with player 1.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn restart(&mut self) {
        self.grid = Grid::new(*self.config.grid_size());
        self.turn = PlayerId::FIRST;
        self.status = GameStatus::InProgress;
        info!("Game restarted");

        self.check_invariants();
        self.events.dispatch(&GameEvent::GameRestarted);
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                error!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(false, "Invariants violated: {violations:?}");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
