//! Observer interface: the engine's only output channel
//!
//! Observers are called synchronously, in registration order, after every
//! change the engine makes. They receive a shared reference to the engine and
//! may query it, but cannot change it while being notified.

use super::{GameEngine, Notification};
use std::sync::mpsc::Sender;

/// A listener registered with [`GameEngine::add_observer`]
pub trait Observer {
    /// Called after the engine changes
    fn update(&mut self, engine: &GameEngine, notification: Notification);
}

/// Any `FnMut(&GameEngine, Notification)` closure is an observer
impl<F> Observer for F
where
    F: FnMut(&GameEngine, Notification),
{
    fn update(&mut self, engine: &GameEngine, notification: Notification) {
        self(engine, notification);
    }
}

/// Queues notifications for a front end that runs its own event loop
///
/// A disconnected receiver is ignored.
impl Observer for Sender<Notification> {
    fn update(&mut self, _engine: &GameEngine, notification: Notification) {
        let _ = self.send(notification);
    }
}
