//! Gridline core - N-by-N line game logic.
//!
//! Players take turns placing markers on a square grid; the first to fill
//! a whole row, column or diagonal wins.
//!
//! # Architecture
//!
//! - **Grid**: passive board state, flat row-major storage
//! - **Geometry**: named row/column/diagonal index functions
//! - **Rules**: win scan and stalemate check over a grid
//! - **Game**: the engine; validates placements, rotates turns, emits events
//! - **Invariants**: properties checked after every command in debug builds
//!
//! # Example
//!
//! ```
//! use gridline_core::{Game, GameConfig, GameStatus, Placement};
//!
//! let mut game = Game::new(GameConfig::new(3, 2).unwrap());
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(game.place_marker(index), Ok(Placement::Continue));
//! }
//! assert!(matches!(game.place_marker(2), Ok(Placement::Won(_))));
//! assert!(!game.status().is_in_progress());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod events;
mod game;
pub mod geometry;
mod grid;
pub mod invariants;
pub mod rules;
mod types;

pub use config::{
    ConfigError, DEFAULT_GRID_SIZE, DEFAULT_PLAYER_COUNT, GameConfig, MAX_GRID_SIZE,
    MIN_GRID_SIZE,
};
pub use events::{EventDispatcher, GameEvent, GameEventHandler, HandlerError};
pub use game::Game;
pub use geometry::Line;
pub use grid::{Grid, GridError};
pub use types::{Cell, GameStatus, InvalidPlayerId, MAX_PLAYERS, Placement, PlayerId};
