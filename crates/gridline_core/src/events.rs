//! Outcome events emitted by the engine.
//!
//! Events are published after a state transition is committed. Handlers
//! are fire-and-forget: whatever they do, and however they fail, the
//! engine state is already final.

use crate::types::PlayerId;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// Something a presentation collaborator may react to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::IntoStaticStr,
)]
pub enum GameEvent {
    /// A marker was placed and play continues.
    MoveAccepted,
    /// A marker completed a line.
    GameWon(PlayerId),
    /// The grid was cleared for a new game.
    GameRestarted,
}

/// Failure inside an event handler.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Handler error: {} at {}:{}", message, file, line)]
pub struct HandlerError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HandlerError {
    /// Creates a new handler error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A swappable consumer of [`GameEvent`]s.
pub trait GameEventHandler {
    /// Reacts to an event. Errors are logged by the dispatcher and dropped.
    fn handle(&mut self, event: &GameEvent) -> Result<(), HandlerError>;

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<H: GameEventHandler> GameEventHandler for Rc<RefCell<H>> {
    fn handle(&mut self, event: &GameEvent) -> Result<(), HandlerError> {
        match self.try_borrow_mut() {
            Ok(mut handler) => handler.handle(event),
            Err(_) => Err(HandlerError::new("handler is already borrowed")),
        }
    }

    fn name(&self) -> &str {
        std::any::type_name::<H>()
    }
}

/// Fans events out to every subscribed handler, in subscription order.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl EventDispatcher {
    /// Creates a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler.
    pub fn subscribe(&mut self, handler: impl GameEventHandler + 'static) {
        debug!(handler = handler.name(), "Handler subscribed");
        self.handlers.push(Box::new(handler));
    }

    /// Number of subscribed handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Checks if no handler is subscribed.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Delivers `event` to every handler, logging and discarding failures.
    #[instrument(skip(self), fields(event = <&'static str>::from(event), handlers = self.handlers.len()))]
    pub fn dispatch(&mut self, event: &GameEvent) {
        for handler in &mut self.handlers {
            if let Err(error) = handler.handle(event) {
                warn!(handler = handler.name(), %error, "Event handler failed");
            }
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field(
                "handlers",
                &self.handlers.iter().map(|h| h.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
