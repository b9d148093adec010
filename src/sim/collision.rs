//! Collision detection and response for the ball
//!
//! Paddle hits and wall bounces only ever flip the sign of a velocity
//! component, so the ball's speed is constant for the whole rally.

use super::state::{Ball, Paddle, Side};

/// Bounce the ball off `paddle`, which belongs to `side`
///
/// The ball only bounces when it overlaps the paddle *and* is still heading
/// toward it. It is then placed flush against the paddle's face so the next
/// tick starts clear of it. Returns true on a hit.
pub fn paddle_bounce(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    let paddle_rect = paddle.bounds();
    if !ball.bounds().intersects(&paddle_rect) {
        return false;
    }

    match side {
        Side::Player if ball.vel.x < 0.0 => {
            ball.vel.x = ball.vel.x.abs();
            ball.pos.x = paddle_rect.right();
            true
        }
        Side::Ai if ball.vel.x > 0.0 => {
            ball.vel.x = -ball.vel.x.abs();
            ball.pos.x = paddle_rect.left() - ball.size.x;
            true
        }
        _ => false,
    }
}

/// Bounce the ball off the top or bottom wall
///
/// Only the vertical velocity changes. Returns true on a bounce.
pub fn wall_bounce(ball: &mut Ball, field_height: f32) -> bool {
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = ball.vel.y.abs();
        true
    } else if ball.pos.y + ball.size.y >= field_height {
        ball.pos.y = field_height - ball.size.y;
        ball.vel.y = -ball.vel.y.abs();
        true
    } else {
        false
    }
}

/// Side that scores if the ball has reached the left or right edge
pub fn goal_check(ball: &Ball, field_width: f32) -> Option<Side> {
    let rect = ball.bounds();
    if rect.left() <= 0.0 {
        Some(Side::Ai)
    } else if rect.right() >= field_width {
        Some(Side::Player)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const FIELD: Vec2 = Vec2::new(800.0, 400.0);

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        let mut ball = Ball::new(FIELD, 7.0, Vec2::new(vx, vy));
        ball.pos = Vec2::new(x, y);
        ball
    }

    #[test]
    fn test_player_paddle_bounce_places_ball_flush() {
        let paddle = Paddle::new(10.0, 150.0, 10.0, 100.0, 7.0);
        let mut ball = ball_at(15.0, 180.0, -5.0, 3.0);

        assert!(paddle_bounce(&mut ball, &paddle, Side::Player));
        assert_eq!(ball.vel, Vec2::new(5.0, 3.0));
        assert_eq!(ball.pos.x, 20.0);
        assert!(!ball.bounds().intersects(&paddle.bounds()));
    }

    #[test]
    fn test_ai_paddle_bounce_places_ball_flush() {
        let paddle = Paddle::new(780.0, 150.0, 10.0, 100.0, 7.0);
        let mut ball = ball_at(776.0, 200.0, 5.0, -3.0);

        assert!(paddle_bounce(&mut ball, &paddle, Side::Ai));
        assert_eq!(ball.vel, Vec2::new(-5.0, -3.0));
        assert_eq!(ball.pos.x, 773.0);
    }

    #[test]
    fn test_no_bounce_when_moving_away() {
        let paddle = Paddle::new(10.0, 150.0, 10.0, 100.0, 7.0);
        let mut ball = ball_at(15.0, 180.0, 5.0, 3.0);

        assert!(!paddle_bounce(&mut ball, &paddle, Side::Player));
        assert_eq!(ball.vel, Vec2::new(5.0, 3.0));
        assert_eq!(ball.pos.x, 15.0);

        let paddle = Paddle::new(780.0, 150.0, 10.0, 100.0, 7.0);
        let mut ball = ball_at(776.0, 200.0, -5.0, 0.0);
        assert!(!paddle_bounce(&mut ball, &paddle, Side::Ai));
        assert_eq!(ball.vel.x, -5.0);
    }

    #[test]
    fn test_no_bounce_with_zero_horizontal_velocity() {
        let paddle = Paddle::new(10.0, 150.0, 10.0, 100.0, 10.0);
        let mut ball = ball_at(15.0, 180.0, 0.0, 3.0);
        assert!(!paddle_bounce(&mut ball, &paddle, Side::Player));
        assert_eq!(ball.vel, Vec2::new(0.0, 3.0));
        assert_eq!(ball.pos.x, 15.0);

        let paddle = Paddle::new(780.0, 150.0, 10.0, 100.0, 7.0);
        let mut ball = ball_at(776.0, 200.0, 0.0, -3.0);
        assert!(!paddle_bounce(&mut ball, &paddle, Side::Ai));
        assert_eq!(ball.vel, Vec2::new(0.0, -3.0));
        assert_eq!(ball.pos.x, 776.0);
    }

    #[test]
    fn test_no_bounce_without_overlap() {
        let paddle = Paddle::new(10.0, 150.0, 10.0, 100.0, 7.0);
        let mut ball = ball_at(15.0, 20.0, -5.0, 3.0);
        assert!(!paddle_bounce(&mut ball, &paddle, Side::Player));
        assert_eq!(ball.vel.x, -5.0);
    }

    #[test]
    fn test_top_wall_clamps_and_bounces_down() {
        let mut ball = ball_at(400.0, -3.0, 5.0, -4.0);
        assert!(wall_bounce(&mut ball, 400.0));
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel, Vec2::new(5.0, 4.0));
    }

    #[test]
    fn test_bottom_wall_clamps_and_bounces_up() {
        let mut ball = ball_at(400.0, 396.0, -5.0, 4.0);
        assert!(wall_bounce(&mut ball, 400.0));
        assert_eq!(ball.pos.y, 393.0);
        assert_eq!(ball.vel, Vec2::new(-5.0, -4.0));
    }

    #[test]
    fn test_goal_check_edges() {
        assert_eq!(goal_check(&ball_at(0.0, 200.0, -5.0, 0.0), 800.0), Some(Side::Ai));
        assert_eq!(goal_check(&ball_at(793.0, 200.0, 5.0, 0.0), 800.0), Some(Side::Player));
        assert_eq!(goal_check(&ball_at(400.0, 200.0, 5.0, 0.0), 800.0), None);
    }
}
