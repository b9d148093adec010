//! Retro Pong - classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, match state)
//! - `menu`: Replay menu protocol shown between matches
//! - `platform`: Input service abstraction implemented by the host
//! - `renderer`: Per-frame draw description and the host drawing surface
//! - `settings`: Data-driven game configuration
//! - `game`: Frame driver tying input, simulation, menu and rendering together

pub mod game;
pub mod menu;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, Game};
pub use settings::{ServeMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Player paddle step per tick while a movement key is held
    pub const PLAYER_STEP: f32 = 10.0;
    /// AI paddle tracking speed per tick
    pub const AI_SPEED: f32 = 7.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 5.0;

    /// Match defaults
    pub const DEFAULT_BEST_OF: u8 = 5;
    /// Winner banner duration before the replay menu opens
    pub const ROUND_OVER_PAUSE_MS: u64 = 3000;
    /// Sleep between replay menu polls
    pub const MENU_POLL_MS: u64 = 16;
}
