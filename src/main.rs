//! Retro Pong entry point
//!
//! Native builds run a headless demo: a scripted, slightly sluggish player
//! faces the AI, replay menu answers come from the command line, and frames
//! are drawn to a surface that only logs.
//!
//! Usage: `retro-pong [settings.json] [--idle] [3|5|7 ...]`
//!
//! `--idle` hands the left paddle to the built-in tracker instead.

use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use retro_pong::platform::{InputEvent, InputService, Key};
use retro_pong::renderer::{Color, Surface, TextStyle};
use retro_pong::sim::{MatchState, Rect};
use retro_pong::{FrameOutcome, Game, Settings};

/// Frames after which the demo quits on its own
const MAX_DEMO_FRAMES: u64 = 100_000;
/// Chance per frame that the scripted player re-reads the ball position
const PLAYER_REACTION: f64 = 0.6;
/// Dead zone around the paddle center where the scripted player holds still
const PLAYER_DEAD_ZONE: f32 = 8.0;

/// Input service that plays the left paddle and answers the replay menu
struct ScriptedHost {
    rng: Pcg32,
    held: Option<Key>,
    menu_script: VecDeque<Key>,
    awaiting_menu: bool,
    frames: u64,
}

impl ScriptedHost {
    fn new(seed: u64, menu_script: Vec<Key>) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x5eed),
            held: None,
            menu_script: menu_script.into(),
            awaiting_menu: false,
            frames: 0,
        }
    }

    /// Look at the match before the next frame runs
    fn observe(&mut self, state: &MatchState) {
        self.frames += 1;

        if self.awaiting_menu {
            self.awaiting_menu = false;
            self.menu_script.pop_front();
        }

        if self.rng.random_bool(PLAYER_REACTION) {
            let offset = state.ball.center().y - state.player.center_y();
            self.held = if offset < -PLAYER_DEAD_ZONE {
                Some(Key::Up)
            } else if offset > PLAYER_DEAD_ZONE {
                Some(Key::Down)
            } else {
                None
            };
        }
    }
}

impl InputService for ScriptedHost {
    fn is_key_down(&self, key: Key) -> bool {
        self.held == Some(key)
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        if self.frames >= MAX_DEMO_FRAMES {
            return vec![InputEvent::Quit];
        }
        if self.awaiting_menu {
            let key = self.menu_script.front().copied().unwrap_or(Key::Escape);
            return vec![InputEvent::KeyPressed(key)];
        }
        Vec::new()
    }

    fn delay(&mut self, duration: Duration) {
        log::debug!("Skipping {:?} pause (headless)", duration);
        if self.awaiting_menu {
            // Menu ignored the last answer; move on to the next one
            self.menu_script.pop_front();
        }
        self.awaiting_menu = true;
    }
}

/// Surface that logs draw calls instead of drawing
#[derive(Default)]
struct LogSurface {
    presented: u64,
}

impl Surface for LogSurface {
    fn clear(&mut self, _color: Color) {}

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        log::trace!("rect {:?} {:?}", rect.min, rect.size);
    }

    fn fill_ellipse(&mut self, rect: Rect, _color: Color) {
        log::trace!("ball {:?}", rect.center());
    }

    fn line(&mut self, _from: Vec2, _to: Vec2, _color: Color) {}

    fn text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        if style.anchor == retro_pong::renderer::Anchor::Center {
            log::info!("{}", text);
        } else {
            log::trace!("text {:?} at {:?}", text, pos);
        }
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}

#[derive(Serialize)]
struct DemoSummary {
    frames: u64,
    presented: u64,
    winners: Vec<&'static str>,
}

fn parse_menu_key(arg: &str) -> Key {
    match arg {
        "3" => Key::Digit3,
        "5" => Key::Digit5,
        "7" => Key::Digit7,
        _ => Key::Other,
    }
}

fn main() {
    env_logger::init();
    log::info!("Retro Pong (headless) starting...");

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let settings = if args.first().is_some_and(|a| a.ends_with(".json")) {
        let path = args.remove(0);
        Settings::load(Path::new(&path))
    } else {
        Settings::default()
    };

    let idle = args.iter().any(|a| a == "--idle");
    args.retain(|a| a != "--idle");

    let menu_script: Vec<Key> = if args.is_empty() {
        vec![Key::Digit3, Key::Digit7]
    } else {
        args.iter().map(|a| parse_menu_key(a)).collect()
    };

    let mut host = ScriptedHost::new(settings.seed, menu_script);
    let mut surface = LogSurface::default();
    let mut game = Game::new(&settings);
    game.set_idle_mode(idle);
    let mut winners = Vec::new();

    loop {
        host.observe(game.state());
        let outcome = game.frame(&mut host, &mut surface);

        if host.awaiting_menu {
            if let Some(winner) = game.last_events().scored {
                winners.push(winner.label());
            }
        }
        if outcome == FrameOutcome::Exit {
            break;
        }
    }

    let summary = DemoSummary {
        frames: host.frames,
        presented: surface.presented,
        winners,
    };
    match serde_json::to_string(&summary) {
        Ok(json) => log::info!("Demo finished: {}", json),
        Err(e) => log::error!("Could not encode summary: {}", e),
    }
}
