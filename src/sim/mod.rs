//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one velocity step per tick)
//! - Stable iteration order (player one before player two)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionRule, Rect, circle_intersects_rect, sd_rect};
pub use state::{
    Axis, Ball, GameEvent, GameState, Paddle, Player, Playfield, Rules, Score,
};
pub use tick::{PaddleMove, TickInput, tick};
