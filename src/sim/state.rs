//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`; there is no
//! ambient game object, so independent games can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionRule, Rect};
use crate::consts::WALL_MARGIN;
use crate::settings::Settings;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Top paddle
    One,
    /// Bottom paddle
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::One => "player one",
            Player::Two => "player two",
        }
    }
}

/// Axis a wall bounce reflected on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left the playfield and had one velocity component negated
    WallBounce { axis: Axis },
    /// Ball struck a paddle; `score` is that player's new total
    PaddleHit { player: Player, score: u32 },
    /// Ball was put back at the centre after a point
    BallReset,
}

/// Fixed playfield bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ball x is past the right edge or under the left margin
    pub fn outside_horizontally(&self, pos: Vec2) -> bool {
        pos.x > self.width || pos.x < WALL_MARGIN
    }

    /// Ball y is past the bottom edge or under the top margin
    pub fn outside_vertically(&self, pos: Vec2) -> bool {
        pos.y > self.height || pos.y < WALL_MARGIN
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Move by one tick's worth of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// A paddle, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Paddle centred horizontally at the given top edge
    pub fn centered(field: &Playfield, y: f32, size: Vec2) -> Self {
        Self::new(Vec2::new(field.width / 2.0 - size.x / 2.0, y), size)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Slide along x, staying inside the playfield
    pub fn slide(&mut self, dx: f32, field: &Playfield) {
        let max_x = (field.width - self.size.x).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }
}

/// Per-player point counters. Only ever increase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    points: [u32; 2],
}

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        self.points[player.index()]
    }

    /// Credit one point and return the new total
    pub fn award(&mut self, player: Player) -> u32 {
        let slot = &mut self.points[player.index()];
        *slot = slot.saturating_add(1);
        *slot
    }
}

/// Rules a tick plays by
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub collision: CollisionRule,
    pub reset_after_point: bool,
    pub paddle_speed: f32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub playfield: Playfield,
    pub rules: Rules,
    pub ball: Ball,
    /// Indexed by `Player::index`
    pub paddles: [Paddle; 2],
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh game: ball at the centre with the serve velocity, paddles
    /// centred horizontally against the top and bottom edges
    pub fn new(settings: &Settings) -> Self {
        let playfield = settings.playfield();
        let size = Vec2::new(settings.paddle_width, settings.paddle_height);
        let top = settings.paddle_inset;
        let bottom = playfield.height - settings.paddle_inset - settings.paddle_height;

        Self {
            playfield,
            rules: settings.rules(),
            ball: Ball::new(
                playfield.center(),
                settings.ball_velocity,
                settings.ball_radius,
            ),
            paddles: [
                Paddle::centered(&playfield, top, size),
                Paddle::centered(&playfield, bottom, size),
            ],
            score: Score::default(),
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        &mut self.paddles[player.index()]
    }
}
