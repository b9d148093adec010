//! Per-frame simulation tick
//!
//! Advances a match by exactly one step: player input, ball motion,
//! collisions, scoring and the AI paddle, in that order.

use super::collision::{goal_check, paddle_bounce, wall_bounce};
use super::state::{GamePhase, MatchState, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move the player paddle up
    pub up: bool,
    /// Move the player paddle down
    pub down: bool,
    /// Idle/demo mode - the player paddle tracks the ball on its own
    pub idle_mode: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Paddle that returned the ball
    pub paddle_hit: Option<Side>,
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Side credited with a point
    pub scored: Option<Side>,
}

/// Advance the match by one tick
///
/// Does nothing unless the match is in [`GamePhase::Playing`].
pub fn tick(state: &mut MatchState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();
    if state.phase != GamePhase::Playing {
        return events;
    }
    state.time_ticks += 1;

    let field_height = state.field.y;

    // Player paddle
    if input.idle_mode {
        state.player.auto_track(&state.ball, field_height);
    } else {
        if input.up {
            state.player.move_by(-state.player.speed, field_height);
        }
        if input.down {
            state.player.move_by(state.player.speed, field_height);
        }
    }

    state.ball.advance();

    if paddle_bounce(&mut state.ball, &state.player, Side::Player) {
        events.paddle_hit = Some(Side::Player);
    }
    if paddle_bounce(&mut state.ball, &state.ai, Side::Ai) {
        events.paddle_hit = Some(Side::Ai);
    }
    if let Some(side) = events.paddle_hit {
        log::trace!("{} paddle hit at tick {}", side.label(), state.time_ticks);
    }

    events.wall_bounce = wall_bounce(&mut state.ball, field_height);

    if let Some(side) = goal_check(&state.ball, state.field.x) {
        state.award_point(side);
        events.scored = Some(side);
    }

    state.ai.auto_track(&state.ball, field_height);

    events
}
