//! Replay menu shown after a match is decided
//!
//! The menu never ends the process itself. It hands a [`MenuChoice`] back
//! to the caller, who decides whether to start a new match or shut down.

use std::time::Duration;

use crate::platform::{InputEvent, InputService, Key};
use crate::sim::BestOf;

/// Lines listed under the winner banner
pub const MENU_OPTIONS: [&str; 4] = [
    "Press 3 for Best of 3",
    "Press 5 for Best of 5",
    "Press 7 for Best of 7",
    "Press ESC to Exit",
];

/// Outcome of the replay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Play again with this match length
    Selected(BestOf),
    /// Leave the game
    ExitRequested,
}

/// Map a single input event to a menu choice; unbound keys are ignored
pub fn handle_event(event: InputEvent) -> Option<MenuChoice> {
    match event {
        InputEvent::Quit | InputEvent::KeyPressed(Key::Escape) => Some(MenuChoice::ExitRequested),
        InputEvent::KeyPressed(Key::Digit3) => Some(MenuChoice::Selected(BestOf::Three)),
        InputEvent::KeyPressed(Key::Digit5) => Some(MenuChoice::Selected(BestOf::Five)),
        InputEvent::KeyPressed(Key::Digit7) => Some(MenuChoice::Selected(BestOf::Seven)),
        InputEvent::KeyPressed(_) => None,
    }
}

/// Block until the player picks a match length or asks to exit
///
/// `redraw` runs once per poll so the host keeps showing the menu.
pub fn run_replay_menu<I, F>(input: &mut I, poll_interval: Duration, mut redraw: F) -> MenuChoice
where
    I: InputService + ?Sized,
    F: FnMut(),
{
    loop {
        redraw();
        for event in input.poll_events() {
            if let Some(choice) = handle_event(event) {
                log::debug!("Replay menu choice: {:?}", choice);
                return choice;
            }
            log::trace!("Replay menu ignored {:?}", event);
        }
        input.delay(poll_interval);
    }
}
