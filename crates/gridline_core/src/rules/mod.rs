//! Game rules for the line game.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are kept apart from
//! board storage so the engine, the invariants and the front-end can all
//! evaluate a grid without going through a game.

pub mod stalemate;
pub mod win;

pub use stalemate::is_stalemate;
pub use win::{check_winner, line_winner, winning_line};
