//! Game settings
//!
//! Read once at startup from an optional JSON file. Every field has a
//! default, so a settings file only needs to list what it changes.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::RenderConfig;
use crate::sim::BestOf;

/// How the ball is aimed after it returns to the center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServeMode {
    /// Keep whatever velocity the ball had when the point ended
    #[default]
    Fixed,
    /// Flip the horizontal direction on every serve
    Alternate,
    /// Pick horizontal and vertical directions from the seeded RNG
    Random,
}

impl ServeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServeMode::Fixed => "fixed",
            ServeMode::Alternate => "alternate",
            ServeMode::Random => "random",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its side wall
    pub paddle_margin: f32,
    /// Player paddle travel per tick while a key is held
    pub player_step: f32,
    /// AI paddle tracking speed per tick
    pub ai_speed: f32,

    // === Ball ===
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub serve: ServeMode,
    /// Seed for the serve RNG
    pub seed: u64,

    // === Match ===
    /// Length of the first match; 3, 5 or 7
    pub default_best_of: u8,
    /// How long the winner banner stays up
    pub round_over_pause_ms: u64,
    /// Sleep between replay menu polls
    pub menu_poll_ms: u64,

    // === Display ===
    pub render: RenderConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            player_step: PLAYER_STEP,
            ai_speed: AI_SPEED,

            ball_size: BALL_SIZE,
            ball_speed_x: BALL_SPEED_X,
            ball_speed_y: BALL_SPEED_Y,
            serve: ServeMode::Fixed,
            seed: 0,

            default_best_of: DEFAULT_BEST_OF,
            round_over_pause_ms: ROUND_OVER_PAUSE_MS,
            menu_poll_ms: MENU_POLL_MS,

            render: RenderConfig::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Match length for the first match (invalid values mean best of 5)
    pub fn best_of(&self) -> BestOf {
        BestOf::from_u8(self.default_best_of).unwrap_or_else(|| {
            log::warn!(
                "Invalid default_best_of {}, using best of 5",
                self.default_best_of
            );
            BestOf::default()
        })
    }

    pub fn round_over_pause(&self) -> Duration {
        Duration::from_millis(self.round_over_pause_ms)
    }

    pub fn menu_poll_interval(&self) -> Duration {
        Duration::from_millis(self.menu_poll_ms)
    }
}
