//! Gridline - terminal front-end for the line game.
//!
//! The game rules live in [`gridline_core`]; this crate holds the
//! presentation collaborators that react to its events.
//!
//! # Architecture
//!
//! - **Settings**: TOML file plus command-line overrides
//! - **Glyphs**: one marker symbol and colour per player
//! - **Audio**: lazily opened cue player driven by game events
//! - **Celebration**: particle effect started on a win
//! - **TUI**: ratatui rendering and crossterm input loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod audio;
pub mod celebration;
pub mod cli;
pub mod glyphs;
pub mod settings;
pub mod tui;

pub use audio::{
    AudioContext, AudioCues, AudioError, ContextState, SoundCue, TerminalBell, Tone, ToneSink,
};
pub use celebration::{Celebration, Particle};
pub use cli::Cli;
pub use glyphs::{Glyph, glyph_for};
pub use settings::{AudioSettings, Settings};
pub use tui::{App, run_tui};
