//! Canvas 2D drawing surface (WASM only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::DrawSurface;
use crate::error::SetupError;

/// A `<canvas>` element's 2D context
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the canvas's 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, SetupError> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| SetupError::NoContext2d)?
            .ok_or(SetupError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext2d)?;
        Ok(Self { context })
    }
}

impl DrawSurface for CanvasSurface {
    fn set_fill_color(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.context
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.context
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
        self.context.begin_path();
        // Only fails for a negative radius
        if let Err(e) = self.context.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start_angle as f64,
            end_angle as f64,
        ) {
            log::warn!("Arc rejected: {:?}", e);
            return;
        }
        self.context.fill();
    }
}
