//! 2D rendering
//!
//! The game draws through a tiny immediate-mode surface: clear, fill a
//! rectangle, fill an arc, with one current fill colour. On the web that is a
//! `CanvasRenderingContext2d`; natively (and in tests) a command recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{CommandRecorder, DrawCommand};

use glam::Vec2;
use std::f32::consts::TAU;

use crate::sim::{GameState, Player};

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const FOREGROUND: &str = "#fff";
}

/// Height of the centre divider bar
pub const DIVIDER_THICKNESS: f32 = 2.0;

/// A 2D drawing surface
pub trait DrawSurface {
    /// Color used by subsequent fills
    fn set_fill_color(&mut self, color: &str);
    /// Reset a region to transparent
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Fill the pie slice between two angles (radians, clockwise from +x)
    fn fill_arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32);
}

/// Redraw the whole playfield from `state`
///
/// Sets its own fill color and clears first, so the output depends on
/// nothing but `state`.
pub fn render<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S) {
    let field = state.playfield;

    surface.clear_rect(0.0, 0.0, field.width, field.height);
    surface.set_fill_color(colors::FOREGROUND);

    // Divider
    surface.fill_rect(
        0.0,
        field.height / 2.0 - DIVIDER_THICKNESS / 2.0,
        field.width,
        DIVIDER_THICKNESS,
    );

    surface.fill_arc(state.ball.pos, state.ball.radius, 0.0, TAU);

    for player in Player::ALL {
        let paddle = state.paddle(player);
        surface.fill_rect(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y);
    }
}
