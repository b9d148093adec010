//! Game state and core simulation types
//!
//! Everything a match needs lives in [`MatchState`]; the host only reads it
//! to draw and feeds it input through the tick function.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::settings::{ServeMode, Settings};

/// One of the two competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human player, left paddle
    Player,
    /// Computer opponent, right paddle
    Ai,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Match length offered by the replay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BestOf {
    Three,
    #[default]
    Five,
    Seven,
}

impl BestOf {
    /// Parse a best-of count; only 3, 5 and 7 are valid
    pub fn from_u8(n: u8) -> Option<Self> {
        match n {
            3 => Some(BestOf::Three),
            5 => Some(BestOf::Five),
            7 => Some(BestOf::Seven),
            _ => None,
        }
    }

    pub fn games(&self) -> u8 {
        match self {
            BestOf::Three => 3,
            BestOf::Five => 5,
            BestOf::Seven => 7,
        }
    }

    /// Points needed to win: a majority of the games
    pub fn target_score(&self) -> u32 {
        u32::from(self.games() / 2 + 1)
    }
}

/// Current phase of the match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Someone reached the target score, winner banner is showing
    RoundOver { winner: Side },
    /// Waiting for the player to pick the next match length or quit
    ReplayMenu { winner: Side },
    /// Scores and entities are being restored for a new match
    Resetting,
}

impl GamePhase {
    /// Winner of the finished round, if the match is between rounds
    pub fn winner(&self) -> Option<Side> {
        match self {
            GamePhase::RoundOver { winner } | GamePhase::ReplayMenu { winner } => Some(*winner),
            _ => None,
        }
    }
}

/// A paddle rectangle that only moves vertically
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, fixed for the paddle's lifetime
    x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Travel per tick: one key step for the player, the tracking limit when auto-tracking
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Shift vertically, keeping the paddle inside `[0, bounds_height]`
    pub fn move_by(&mut self, delta_y: f32, bounds_height: f32) {
        let max_y = (bounds_height - self.height).max(0.0);
        self.y = (self.y + delta_y).clamp(0.0, max_y);
    }

    /// Step toward the ball's vertical center, at most `speed` per call
    pub fn auto_track(&mut self, ball: &Ball, bounds_height: f32) {
        let offset = ball.center().y - self.center_y();
        self.move_by(offset.clamp(-self.speed, self.speed), bounds_height);
    }

    /// Put the paddle back in the vertical middle of the field
    pub fn recenter(&mut self, bounds_height: f32) {
        self.y = ((bounds_height - self.height) / 2.0).max(0.0);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The ball, collided as an axis-aligned square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner; a reset puts the ball's center, not this corner, at the field center
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub size: Vec2,
    /// Playfield dimensions, used to find the serve position
    pub field: Vec2,
}

impl Ball {
    /// Create a ball resting at the center of `field`
    pub fn new(field: Vec2, size: f32, vel: Vec2) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel,
            size: Vec2::splat(size),
            field,
        };
        ball.reset();
        ball
    }

    /// Advance one tick
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Center the ball on the field (its top-left corner lands half a ball
    /// size up and left of the field center); velocity is left untouched
    pub fn reset(&mut self) {
        self.pos = self.field * 0.5 - self.size * 0.5;
    }

    /// Point the ball horizontally at `side` without changing its speed
    pub fn serve_toward(&mut self, side: Side) {
        self.vel.x = match side {
            Side::Player => -self.vel.x.abs(),
            Side::Ai => self.vel.x.abs(),
        };
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }
}

/// Points scored by each side in the current match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Playfield width and height
    pub field: Vec2,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: GamePhase,
    /// How the ball is aimed after each point
    pub serve: ServeMode,
    /// Simulation tick counter
    pub time_ticks: u64,
    best_of: BestOf,
    target_score: u32,
    /// Serve RNG, seeded from settings
    rng: Pcg32,
}

impl MatchState {
    /// Build a fresh match laid out from the given settings
    pub fn new(settings: &Settings) -> Self {
        let field = Vec2::new(settings.field_width, settings.field_height);
        let paddle_y = (settings.field_height - settings.paddle_height) / 2.0;
        let player = Paddle::new(
            settings.paddle_margin,
            paddle_y,
            settings.paddle_width,
            settings.paddle_height,
            settings.player_step,
        );
        let ai = Paddle::new(
            settings.field_width - settings.paddle_margin - settings.paddle_width,
            paddle_y,
            settings.paddle_width,
            settings.paddle_height,
            settings.ai_speed,
        );
        let ball = Ball::new(
            field,
            settings.ball_size,
            Vec2::new(settings.ball_speed_x, settings.ball_speed_y),
        );
        let best_of = settings.best_of();

        Self {
            field,
            player,
            ai,
            ball,
            score: Score::default(),
            phase: GamePhase::Playing,
            serve: settings.serve,
            time_ticks: 0,
            best_of,
            target_score: best_of.target_score(),
            rng: Pcg32::seed_from_u64(settings.seed),
        }
    }

    pub fn best_of(&self) -> BestOf {
        self.best_of
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Winner of the match, once either side has reached the target score
    pub fn check_round_over(&self) -> Option<Side> {
        if self.score.player >= self.target_score {
            Some(Side::Player)
        } else if self.score.ai >= self.target_score {
            Some(Side::Ai)
        } else {
            None
        }
    }

    /// Enter the winner banner phase
    pub fn begin_round_over(&mut self, winner: Side) {
        log::info!(
            "{} wins {}-{} (best of {})",
            winner.label(),
            self.score.get(winner),
            self.score.get(winner.opponent()),
            self.best_of.games()
        );
        self.phase = GamePhase::RoundOver { winner };
    }

    /// Move from the winner banner to the replay menu
    pub fn open_replay_menu(&mut self) {
        if let GamePhase::RoundOver { winner } = self.phase {
            self.phase = GamePhase::ReplayMenu { winner };
        }
    }

    /// Start a new match of the given length
    ///
    /// Anything other than 3, 5 or 7 falls back to best of 5.
    pub fn reset(&mut self, best_of: u8) {
        self.phase = GamePhase::Resetting;

        let best_of = BestOf::from_u8(best_of).unwrap_or_else(|| {
            log::warn!("Invalid best-of value {best_of}, using best of 5");
            BestOf::default()
        });
        self.best_of = best_of;
        self.target_score = best_of.target_score();
        self.score = Score::default();

        self.player.recenter(self.field.y);
        self.ai.recenter(self.field.y);
        self.ball.reset();
        self.apply_serve();

        log::info!(
            "New match: best of {} (first to {})",
            best_of.games(),
            self.target_score
        );
        self.phase = GamePhase::Playing;
    }

    /// Credit a point to `side` and put the ball back in the middle
    pub fn award_point(&mut self, side: Side) {
        self.score.increment(side);
        log::debug!(
            "{} scores: {}-{}",
            side.label(),
            self.score.player,
            self.score.ai
        );
        self.ball.reset();
        self.apply_serve();
    }

    fn apply_serve(&mut self) {
        match self.serve {
            ServeMode::Fixed => {}
            ServeMode::Alternate => self.ball.vel.x = -self.ball.vel.x,
            ServeMode::Random => {
                let toward = if self.rng.random_bool(0.5) {
                    Side::Player
                } else {
                    Side::Ai
                };
                self.ball.serve_toward(toward);
                if self.rng.random_bool(0.5) {
                    self.ball.vel.y = -self.ball.vel.y;
                }
            }
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field_800x400() -> Settings {
        Settings {
            field_width: 800.0,
            field_height: 400.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_target_score_derivation() {
        assert_eq!(BestOf::Three.target_score(), 2);
        assert_eq!(BestOf::Five.target_score(), 3);
        assert_eq!(BestOf::Seven.target_score(), 4);
        assert_eq!(BestOf::from_u8(4), None);
    }

    #[test]
    fn test_reset_with_invalid_best_of_falls_back_to_five() {
        let mut state = MatchState::new(&field_800x400());
        for invalid in [0, 1, 2, 4, 6, 8, 255] {
            state.reset(invalid);
            assert_eq!(state.best_of(), BestOf::Five);
            assert_eq!(state.target_score(), 3);
        }
    }

    #[test]
    fn test_reset_zeroes_scores_and_recenters() {
        let mut state = MatchState::new(&field_800x400());
        state.score = Score { player: 2, ai: 1 };
        state.player.move_by(-500.0, 400.0);
        state.ai.move_by(500.0, 400.0);
        state.ball.pos = Vec2::new(12.0, 34.0);

        state.reset(7);

        assert_eq!(state.score, Score::default());
        assert_eq!(state.target_score(), 4);
        assert_eq!(state.player.y, 150.0);
        assert_eq!(state.ai.y, 150.0);
        assert_eq!(state.ball.center(), Vec2::new(400.0, 200.0));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_initial_layout() {
        let state = MatchState::new(&field_800x400());
        assert_eq!(state.player.x(), 10.0);
        assert_eq!(state.ai.x(), 780.0);
        assert_eq!(state.player.speed, 10.0);
        assert_eq!(state.ai.speed, 7.0);
        assert_eq!(state.best_of(), BestOf::Five);
        assert_eq!(state.target_score(), 3);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_ball_reset_centers_exactly() {
        let mut ball = Ball::new(Vec2::new(800.0, 400.0), 7.0, Vec2::new(5.0, -5.0));
        ball.pos = Vec2::new(790.0, 3.0);
        ball.reset();
        assert_eq!(ball.center(), Vec2::new(400.0, 200.0));
        assert_eq!(ball.pos, Vec2::new(396.5, 196.5));
        assert_eq!(ball.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_auto_track_moves_by_fixed_step() {
        let mut paddle = Paddle::new(780.0, 150.0, 10.0, 100.0, 7.0);
        let mut ball = Ball::new(Vec2::new(800.0, 400.0), 7.0, Vec2::new(5.0, 5.0));

        ball.pos.y = 20.0;
        paddle.auto_track(&ball, 400.0);
        assert_eq!(paddle.y, 143.0);

        // Within one step the paddle lines up without overshooting
        ball.pos = Vec2::new(400.0, 143.0 + 50.0 - 3.5 + 2.0);
        paddle.auto_track(&ball, 400.0);
        assert_eq!(paddle.center_y(), ball.center().y);
    }

    #[test]
    fn test_check_round_over() {
        let mut state = MatchState::new(&field_800x400());
        state.reset(3);
        assert_eq!(state.check_round_over(), None);

        state.score = Score { player: 1, ai: 1 };
        assert_eq!(state.check_round_over(), None);

        state.score = Score { player: 2, ai: 1 };
        assert_eq!(state.check_round_over(), Some(Side::Player));

        state.score = Score { player: 0, ai: 2 };
        assert_eq!(state.check_round_over(), Some(Side::Ai));
    }

    #[test]
    fn test_round_over_then_menu() {
        let mut state = MatchState::new(&field_800x400());
        state.begin_round_over(Side::Ai);
        assert_eq!(state.phase, GamePhase::RoundOver { winner: Side::Ai });
        state.open_replay_menu();
        assert_eq!(state.phase, GamePhase::ReplayMenu { winner: Side::Ai });
        assert_eq!(state.phase.winner(), Some(Side::Ai));
    }

    #[test]
    fn test_alternate_serve_flips_direction() {
        let settings = Settings {
            serve: ServeMode::Alternate,
            ..field_800x400()
        };
        let mut state = MatchState::new(&settings);
        let vx = state.ball.vel.x;
        state.award_point(Side::Player);
        assert_eq!(state.ball.vel.x, -vx);
        state.award_point(Side::Ai);
        assert_eq!(state.ball.vel.x, vx);
    }

    #[test]
    fn test_random_serve_keeps_speed() {
        let settings = Settings {
            serve: ServeMode::Random,
            ..field_800x400()
        };
        let mut state = MatchState::new(&settings);
        for _ in 0..20 {
            state.award_point(Side::Player);
            assert_eq!(state.ball.vel.abs(), Vec2::new(5.0, 5.0));
        }
    }

    proptest! {
        #[test]
        fn prop_paddle_move_stays_in_bounds(
            start in -1000.0f32..1000.0,
            delta in -2000.0f32..2000.0,
        ) {
            let mut paddle = Paddle::new(10.0, start, 10.0, 100.0, 7.0);
            paddle.move_by(delta, 400.0);
            prop_assert!(paddle.y >= 0.0);
            prop_assert!(paddle.y <= 300.0);
        }

        #[test]
        fn prop_round_over_iff_target_reached(player in 0u32..6, ai in 0u32..6) {
            let mut state = MatchState::default();
            state.reset(5);
            state.score = Score { player, ai };
            let over = state.check_round_over();
            prop_assert_eq!(over.is_some(), player >= 3 || ai >= 3);
            if let Some(winner) = over {
                prop_assert!(state.score.get(winner) >= 3);
            }
        }
    }
}
