//! Serializable draw commands

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{ArcDirection, GraphicsContext};
use crate::color::Color;
use crate::geometry::Rect;

/// One [`GraphicsContext`] call, as data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillEllipse {
        rect: Rect,
        color: Color,
    },
    BeginPath,
    AddArc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        direction: ArcDirection,
    },
    Clip,
    Translate {
        dx: f32,
        dy: f32,
    },
    Rotate {
        angle: f32,
    },
    SetStrokeWidth {
        width: f32,
    },
    SetStrokeColor {
        color: Color,
    },
    MoveTo {
        point: Vec2,
    },
    LineTo {
        point: Vec2,
    },
    StrokePath,
    SaveState,
    RestoreState,
}

impl DrawCommand {
    /// Issue this command against a context
    pub fn apply<C: GraphicsContext + ?Sized>(&self, ctx: &mut C) {
        match *self {
            DrawCommand::FillEllipse { rect, color } => ctx.fill_ellipse(rect, color),
            DrawCommand::BeginPath => ctx.begin_path(),
            DrawCommand::AddArc {
                center,
                radius,
                start_angle,
                end_angle,
                direction,
            } => ctx.add_arc(center, radius, start_angle, end_angle, direction),
            DrawCommand::Clip => ctx.clip(),
            DrawCommand::Translate { dx, dy } => ctx.translate(dx, dy),
            DrawCommand::Rotate { angle } => ctx.rotate(angle),
            DrawCommand::SetStrokeWidth { width } => ctx.set_stroke_width(width),
            DrawCommand::SetStrokeColor { color } => ctx.set_stroke_color(color),
            DrawCommand::MoveTo { point } => ctx.move_to(point),
            DrawCommand::LineTo { point } => ctx.line_to(point),
            DrawCommand::StrokePath => ctx.stroke_path(),
            DrawCommand::SaveState => ctx.save_state(),
            DrawCommand::RestoreState => ctx.restore_state(),
        }
    }
}

/// Feed a command list to a context, in order
pub fn replay<C: GraphicsContext + ?Sized>(commands: &[DrawCommand], ctx: &mut C) {
    for command in commands {
        command.apply(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CommandRecorder;

    #[test]
    fn test_replay_reproduces_commands() {
        let commands = vec![
            DrawCommand::SaveState,
            DrawCommand::SetStrokeWidth { width: 4.0 },
            DrawCommand::MoveTo { point: Vec2::ZERO },
            DrawCommand::LineTo {
                point: Vec2::new(10.0, 0.0),
            },
            DrawCommand::StrokePath,
            DrawCommand::RestoreState,
        ];

        let mut recorder = CommandRecorder::new();
        replay(&commands, &mut recorder);
        assert_eq!(recorder.commands(), commands.as_slice());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(DrawCommand::Rotate { angle: 0.5 }).unwrap();
        assert_eq!(json, serde_json::json!({ "op": "rotate", "angle": 0.5 }));

        let parsed: DrawCommand = serde_json::from_str(r#"{"op":"stroke_path"}"#).unwrap();
        assert_eq!(parsed, DrawCommand::StrokePath);
    }
}
