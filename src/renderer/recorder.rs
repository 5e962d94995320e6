//! Recording draw surface
//!
//! Captures draw calls as data. The native runner uses it in place of a
//! canvas; tests compare frames with it.

use glam::Vec2;

use super::DrawSurface;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetFillColor(String),
    ClearRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    FillArc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
}

/// Surface that appends every call to a frame buffer
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the frame in progress
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the current frame's commands
    pub fn take_frame(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of full-surface clears seen, i.e. frames drawn
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DrawSurface for CommandRecorder {
    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFillColor(color.to_string()));
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        // A clear starts a new frame; keep memory flat on long runs
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
        self.commands.push(DrawCommand::FillArc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }
}
