//! Game rules and state machine
//!
//! [`GameEngine`] owns the board and applies every rule; [`Observer`]s are
//! told about each change and read the engine back to render it.

mod engine;
mod observer;
mod state;

pub use engine::{EngineError, GameEngine, Row};
pub use observer::Observer;
pub use state::{GameState, IllegalReason, Notification};
