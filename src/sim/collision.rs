//! Ball-vs-paddle collision tests
//!
//! Paddles are axis-aligned rectangles and the ball is a circle. The default
//! rule asks whether the circle overlaps the rectangle, using the signed
//! distance from the ball centre to the box. There is no sweep: a ball fast
//! enough to cross a paddle within one tick passes straight through.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Player};

/// Axis-aligned rectangle, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

/// Signed distance from `p` to an axis-aligned box (negative inside)
#[inline]
pub fn sd_rect(p: Vec2, rect: &Rect) -> f32 {
    let q = (p - rect.center()).abs() - rect.size * 0.5;
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0)
}

/// Does a circle overlap a rectangle?
///
/// Touching edges do not count. A zero radius degrades to "centre strictly
/// inside the rectangle".
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    sd_rect(center, rect) < radius
}

/// Which containment test decides a paddle hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionRule {
    /// Same circle-vs-rectangle test for both paddles, counted only while the
    /// ball is heading toward that paddle's side
    #[default]
    Uniform,
    /// The first page version's comparisons, kept for side-by-side play: the
    /// top paddle's test compares the ball against the paddle's size where
    /// its position was meant, and only the bottom paddle's test pads the
    /// ball by its radius.
    Legacy,
}

impl CollisionRule {
    /// Whether `ball` counts as striking `player`'s paddle this tick
    pub fn hits(self, player: Player, ball: &Ball, paddle: &Paddle) -> bool {
        match self {
            CollisionRule::Uniform => {
                approaching(player, ball)
                    && circle_intersects_rect(ball.pos, ball.radius, &paddle.rect())
            }
            CollisionRule::Legacy => legacy_hit(player, ball, paddle),
        }
    }
}

/// Player one guards the top edge, player two the bottom
fn approaching(player: Player, ball: &Ball) -> bool {
    match player {
        Player::One => ball.vel.y < 0.0,
        Player::Two => ball.vel.y > 0.0,
    }
}

fn legacy_hit(player: Player, ball: &Ball, paddle: &Paddle) -> bool {
    let (x, y) = (ball.pos.x, ball.pos.y);
    let far = paddle.rect().max();
    match player {
        Player::One => x > paddle.size.x && x < far.x && y > paddle.size.y && y < far.y,
        Player::Two => {
            x + ball.radius > paddle.size.x
                && x < far.x
                && y + ball.radius > paddle.size.y
                && y < far.y
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_paddle() -> Paddle {
        Paddle::new(Vec2::new(375.0, 5.0), Vec2::new(50.0, 5.0))
    }

    /// Serve velocity: moving down the field
    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(2.0, 7.0), 5.0)
    }

    fn rising_ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(2.0, -7.0), 5.0)
    }

    #[test]
    fn test_sd_rect() {
        let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0));
        // Inside: distance to nearest edge, negated
        assert!((sd_rect(Vec2::new(5.0, 2.0), &rect) + 2.0).abs() < 1e-6);
        // Beside the right edge
        assert!((sd_rect(Vec2::new(13.0, 2.0), &rect) - 3.0).abs() < 1e-6);
        // Off the corner
        assert!((sd_rect(Vec2::new(13.0, 8.0), &rect) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_circle_rect_centre_inside() {
        let paddle = top_paddle();
        assert!(circle_intersects_rect(Vec2::new(400.0, 7.0), 5.0, &paddle.rect()));
        assert!(circle_intersects_rect(Vec2::new(400.0, 7.0), 0.0, &paddle.rect()));
    }

    #[test]
    fn test_circle_rect_edge_overlap_and_touch() {
        let rect = top_paddle().rect();
        // Centre 4 below the paddle's bottom edge (y = 10): overlaps
        assert!(circle_intersects_rect(Vec2::new(400.0, 14.0), 5.0, &rect));
        // Exactly touching: not a hit
        assert!(!circle_intersects_rect(Vec2::new(400.0, 15.0), 5.0, &rect));
        // Corner: distance sqrt(3^2 + 3^2) ~ 4.24 < 5
        assert!(circle_intersects_rect(Vec2::new(428.0, 13.0), 5.0, &rect));
        // Corner: distance sqrt(4^2 + 4^2) ~ 5.66 > 5
        assert!(!circle_intersects_rect(Vec2::new(429.0, 14.0), 5.0, &rect));
    }

    #[test]
    fn test_uniform_rule_is_symmetric() {
        let top = top_paddle();
        let bottom = Paddle::new(Vec2::new(375.0, 490.0), Vec2::new(50.0, 5.0));
        let rule = CollisionRule::Uniform;

        assert!(rule.hits(Player::One, &rising_ball_at(400.0, 13.0), &top));
        assert!(rule.hits(Player::Two, &ball_at(400.0, 487.0), &bottom));
        assert!(!rule.hits(Player::One, &rising_ball_at(400.0, 16.0), &top));
        assert!(!rule.hits(Player::Two, &ball_at(400.0, 484.0), &bottom));
    }

    #[test]
    fn test_uniform_rule_ignores_receding_ball() {
        let top = top_paddle();
        let bottom = Paddle::new(Vec2::new(375.0, 490.0), Vec2::new(50.0, 5.0));
        let rule = CollisionRule::Uniform;

        // Overlapping, but already heading away from the paddle
        assert!(!rule.hits(Player::One, &ball_at(400.0, 7.0), &top));
        assert!(!rule.hits(Player::Two, &rising_ball_at(400.0, 492.0), &bottom));
        // Horizontal-only motion never approaches either paddle
        let sideways = Ball::new(Vec2::new(400.0, 7.0), Vec2::new(2.0, 0.0), 5.0);
        assert!(!rule.hits(Player::One, &sideways, &top));

        // Legacy keeps the page's direction-blind test
        assert!(CollisionRule::Legacy.hits(Player::One, &ball_at(400.0, 7.0), &top));
    }

    #[test]
    fn test_legacy_rule_reproduces_page_quirks() {
        let top = top_paddle();
        let rule = CollisionRule::Legacy;

        assert!(rule.hits(Player::One, &ball_at(400.0, 7.0), &top));
        // Compares x against the paddle width (50), so far-left balls still count
        assert!(rule.hits(Player::One, &ball_at(60.0, 7.0), &top));
        assert!(!CollisionRule::Uniform.hits(Player::One, &ball_at(60.0, 7.0), &top));
        // No radius padding on the top paddle
        assert!(!rule.hits(Player::One, &ball_at(400.0, 11.0), &top));

        // Bottom paddle: ball y only needs to be under paddle.y + height
        let bottom = Paddle::new(Vec2::new(375.0, 490.0), Vec2::new(50.0, 5.0));
        assert!(rule.hits(Player::Two, &ball_at(400.0, 250.0), &bottom));
        assert!(!rule.hits(Player::Two, &ball_at(400.0, 496.0), &bottom));
    }
}
