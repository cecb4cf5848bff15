//! A graphics context that records instead of drawing

use glam::Vec2;

use super::{ArcDirection, DrawCommand, GraphicsContext};
use crate::color::Color;
use crate::geometry::Rect;

/// Records every call as a [`DrawCommand`]
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of `StrokePath` commands recorded
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokePath))
            .count()
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl GraphicsContext for CommandRecorder {
    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::FillEllipse { rect, color });
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn add_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        direction: ArcDirection,
    ) {
        self.push(DrawCommand::AddArc {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
        });
    }

    fn clip(&mut self) {
        self.push(DrawCommand::Clip);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.push(DrawCommand::Translate { dx, dy });
    }

    fn rotate(&mut self, angle: f32) {
        self.push(DrawCommand::Rotate { angle });
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.push(DrawCommand::SetStrokeWidth { width });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.push(DrawCommand::SetStrokeColor { color });
    }

    fn move_to(&mut self, point: Vec2) {
        self.push(DrawCommand::MoveTo { point });
    }

    fn line_to(&mut self, point: Vec2) {
        self.push(DrawCommand::LineTo { point });
    }

    fn stroke_path(&mut self) {
        self.push(DrawCommand::StrokePath);
    }

    fn save_state(&mut self) {
        self.push(DrawCommand::SaveState);
    }

    fn restore_state(&mut self) {
        self.push(DrawCommand::RestoreState);
    }
}
