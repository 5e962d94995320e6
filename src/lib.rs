//! Canvas Pong - a two-paddle Pong demo for a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, tick)
//! - `renderer`: Draw-surface abstraction and the per-tick redraw
//! - `game`: Loop driver tying a tick to the score display and renderer
//! - `platform`: Browser/native platform abstraction (timer, input, DOM)
//! - `settings`: Data-driven configuration

pub mod error;
pub mod game;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SetupError;
pub use game::Game;
pub use hud::{ScoreBoard, ScoreDisplay};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second. Ball speed is expressed per tick, so this
    /// rate is what fixes the apparent game speed.
    pub const TICK_RATE: f32 = 60.0;
    /// Accepted range for a configured tick rate
    pub const MIN_TICK_RATE: f32 = 1.0;
    pub const MAX_TICK_RATE: f32 = 1000.0;
    /// Maximum ticks the native scheduler runs back-to-back after a stall
    pub const MAX_CATCHUP_TICKS: u32 = 4;

    /// Playfield dimensions (the page's canvas is 800x500)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;
    /// Near-zero edge below which the ball counts as out of bounds
    pub const WALL_MARGIN: f32 = 3.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 5.0;
    /// Gap between a paddle and its edge of the playfield
    pub const PADDLE_INSET: f32 = 5.0;
    /// Paddle travel per tick while a direction key is held
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_START_VX: f32 = 2.0;
    pub const BALL_START_VY: f32 = 7.0;
}
