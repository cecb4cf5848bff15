//! Drawing surface abstraction
//!
//! The bubble code only ever talks to a [`GraphicsContext`]. Backends decide
//! what the calls mean: [`CommandRecorder`] records them as [`DrawCommand`]s,
//! the software rasterizer paints pixels.

pub mod command;
pub mod recorder;

pub use command::{DrawCommand, replay};
pub use recorder::CommandRecorder;

use std::ops::{Deref, DerefMut};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::Rect;

/// Sweep direction of an arc, in user space angles
///
/// `CounterClockwise` sweeps towards increasing angles, `Clockwise` towards
/// decreasing ones. A sweep of a full turn or more is a whole circle either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcDirection {
    Clockwise,
    CounterClockwise,
}

/// Primitive 2D drawing operations a host surface provides
///
/// Path, transform and stroke calls follow the usual immediate-mode model:
/// transforms concatenate onto the current transform, `stroke_path` and
/// `clip` consume the current path, and `save_state`/`restore_state` bracket
/// transform, stroke and clip changes.
pub trait GraphicsContext {
    /// Fill the ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Discard the current path
    fn begin_path(&mut self);
    /// Append a circular arc to the current path
    fn add_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        direction: ArcDirection,
    );
    /// Intersect the clip region with the current path, then discard the path
    fn clip(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);
    fn rotate(&mut self, angle: f32);

    fn set_stroke_width(&mut self, width: f32);
    fn set_stroke_color(&mut self, color: Color);

    fn move_to(&mut self, point: Vec2);
    fn line_to(&mut self, point: Vec2);
    /// Stroke the current path, then discard it
    fn stroke_path(&mut self);

    fn save_state(&mut self);
    fn restore_state(&mut self);
}

/// Saved graphics state that is restored when dropped
///
/// Derefs to the wrapped context, so drawing goes through the guard.
pub struct ScopedState<'a, C: GraphicsContext + ?Sized> {
    ctx: &'a mut C,
}

impl<'a, C: GraphicsContext + ?Sized> ScopedState<'a, C> {
    pub fn new(ctx: &'a mut C) -> Self {
        ctx.save_state();
        Self { ctx }
    }
}

impl<C: GraphicsContext + ?Sized> Deref for ScopedState<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &*self.ctx
    }
}

impl<C: GraphicsContext + ?Sized> DerefMut for ScopedState<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut *self.ctx
    }
}

impl<C: GraphicsContext + ?Sized> Drop for ScopedState<'_, C> {
    fn drop(&mut self) {
        self.ctx.restore_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_state_brackets_drawing() {
        let mut recorder = CommandRecorder::new();
        {
            let mut scoped = ScopedState::new(&mut recorder);
            scoped.translate(1.0, 2.0);
        }
        assert_eq!(
            recorder.commands(),
            &[
                DrawCommand::SaveState,
                DrawCommand::Translate { dx: 1.0, dy: 2.0 },
                DrawCommand::RestoreState,
            ]
        );
    }

    #[test]
    fn test_scoped_state_restores_on_early_exit() {
        fn bail_early(ctx: &mut dyn GraphicsContext) -> Option<()> {
            let mut scoped = ScopedState::new(ctx);
            scoped.rotate(1.0);
            let missing: Option<()> = None;
            missing?;
            scoped.rotate(2.0);
            Some(())
        }

        let mut recorder = CommandRecorder::new();
        assert!(bail_early(&mut recorder).is_none());
        assert_eq!(recorder.commands().last(), Some(&DrawCommand::RestoreState));
        assert_eq!(recorder.len(), 3);
    }
}
