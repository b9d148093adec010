//! Per-frame snapshot of everything the host needs to draw

use glam::Vec2;
use serde::Serialize;

use crate::menu::MENU_OPTIONS;
use crate::sim::{GamePhase, MatchState, Rect, Side};

/// Vertical position of the score digits
pub const SCORE_Y: f32 = 20.0;

/// Text shown between matches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    /// Winner banner, e.g. "Player Wins!"
    pub title: String,
    /// Final score line
    pub summary: String,
    /// Replay menu choices; empty while the banner is showing
    pub options: Vec<String>,
}

impl Overlay {
    fn new(winner: Side, state: &MatchState, with_options: bool) -> Self {
        let options = if with_options {
            MENU_OPTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };
        Self {
            title: format!("{} Wins!", winner.label()),
            summary: format!(
                "Final score: Player {} - {} AI",
                state.score.player, state.score.ai
            ),
            options,
        }
    }
}

/// Drawable view of a match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub field: Vec2,
    pub player: Rect,
    pub ai: Rect,
    pub ball: Rect,
    /// Net line from top to bottom of the field
    pub center_line: (Vec2, Vec2),
    pub player_score: u32,
    pub ai_score: u32,
    pub player_score_pos: Vec2,
    pub ai_score_pos: Vec2,
    pub overlay: Option<Overlay>,
}

impl Frame {
    pub fn capture(state: &MatchState) -> Self {
        let field = state.field;
        let overlay = match state.phase {
            GamePhase::RoundOver { winner } => Some(Overlay::new(winner, state, false)),
            GamePhase::ReplayMenu { winner } => Some(Overlay::new(winner, state, true)),
            GamePhase::Playing | GamePhase::Resetting => None,
        };

        Self {
            field,
            player: state.player.bounds(),
            ai: state.ai.bounds(),
            ball: state.ball.bounds(),
            center_line: (Vec2::new(field.x / 2.0, 0.0), Vec2::new(field.x / 2.0, field.y)),
            player_score: state.score.player,
            ai_score: state.score.ai,
            player_score_pos: Vec2::new(field.x / 4.0, SCORE_Y),
            ai_score_pos: Vec2::new(field.x * 3.0 / 4.0, SCORE_Y),
            overlay,
        }
    }
}
