//! Frame driver
//!
//! One call to [`Game::frame`] is one host frame: read input, tick the
//! match, handle a decided match (banner, replay menu, reset) and draw.

use std::time::Duration;

use crate::menu::{MenuChoice, run_replay_menu};
use crate::platform::{InputEvent, InputService, Key};
use crate::renderer::{Frame, Renderer, Surface};
use crate::settings::Settings;
use crate::sim::{MatchState, TickEvents, TickInput, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep running
    Continue,
    /// The player asked to leave; tear down the display and exit
    Exit,
}

/// A running game session
pub struct Game {
    state: MatchState,
    renderer: Renderer,
    round_over_pause: Duration,
    menu_poll_interval: Duration,
    last_events: TickEvents,
    idle_mode: bool,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let state = MatchState::new(settings);
        log::info!(
            "Game ready: {}x{} field, best of {}, {} serve",
            settings.field_width,
            settings.field_height,
            state.best_of().games(),
            settings.serve.as_str()
        );
        Self {
            state,
            renderer: Renderer::new(settings.render.clone()),
            round_over_pause: settings.round_over_pause(),
            menu_poll_interval: settings.menu_poll_interval(),
            last_events: TickEvents::default(),
            idle_mode: false,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Let the player paddle track the ball on its own (demo/attract mode)
    pub fn set_idle_mode(&mut self, idle: bool) {
        log::info!("Idle mode: {}", idle);
        self.idle_mode = idle;
    }

    /// Events from the most recent tick (for sound or effects on the host)
    pub fn last_events(&self) -> TickEvents {
        self.last_events
    }

    /// Run one frame
    pub fn frame<I, S>(&mut self, input: &mut I, surface: &mut S) -> FrameOutcome
    where
        I: InputService + ?Sized,
        S: Surface + ?Sized,
    {
        if quit_requested(input) {
            log::info!("Quit requested");
            return FrameOutcome::Exit;
        }

        let tick_input = TickInput {
            up: input.is_key_down(Key::Up),
            down: input.is_key_down(Key::Down),
            idle_mode: self.idle_mode,
        };
        self.last_events = tick(&mut self.state, &tick_input);

        if let Some(winner) = self.state.check_round_over() {
            self.state.begin_round_over(winner);
            self.render(surface);

            // Banner stays up; keys pressed meanwhile are dropped
            input.delay(self.round_over_pause);
            if quit_requested(input) {
                log::info!("Quit requested");
                return FrameOutcome::Exit;
            }

            self.state.open_replay_menu();
            let state = &self.state;
            let renderer = &self.renderer;
            let choice = run_replay_menu(input, self.menu_poll_interval, || {
                renderer.draw(surface, &Frame::capture(state))
            });

            match choice {
                MenuChoice::ExitRequested => {
                    log::info!("Exit chosen from replay menu");
                    return FrameOutcome::Exit;
                }
                MenuChoice::Selected(best_of) => self.state.reset(best_of.games()),
            }
        }

        self.render(surface);
        FrameOutcome::Continue
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.renderer.draw(surface, &Frame::capture(&self.state));
    }
}

fn quit_requested<I: InputService + ?Sized>(input: &mut I) -> bool {
    input
        .poll_events()
        .iter()
        .any(|event| *event == InputEvent::Quit)
}
