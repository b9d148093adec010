//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{goal_check, paddle_bounce, wall_bounce};
pub use rect::Rect;
pub use state::{Ball, BestOf, GamePhase, MatchState, Paddle, Score, Side};
pub use tick::{TickEvents, TickInput, tick};
