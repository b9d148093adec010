//! Platform abstraction layer
//!
//! The host owns the keyboard and the clock; the game only sees them
//! through [`InputService`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Digit3,
    Digit5,
    Digit7,
    Escape,
    /// Any key the game has no binding for
    Other,
}

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyPressed(Key),
    /// Window closed or the host asked to stop
    Quit,
}

/// Input and timing services provided by the host
pub trait InputService {
    /// Whether a key is held down right now (continuous movement)
    fn is_key_down(&self, key: Key) -> bool;

    /// Drain the events that arrived since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Block for `duration`, discarding input
    ///
    /// Sleeps the calling thread unless the host overrides it.
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
