//! Rectangle geometry for the bubble bounds

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in y-down space (origin is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle at the origin, like a view's local bounds
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.origin.x + self.size.x / 2.0
    }

    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.origin.y + self.size.y / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.mid_x(), self.mid_y())
    }

    /// Bottom-left corner (y-down)
    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.min_x(), self.max_y())
    }

    /// Length of the diagonal, sqrt(w² + h²)
    pub fn diagonal(&self) -> f32 {
        self.size.length()
    }

    /// Radius of the bubble drawn in this rectangle (the width is the diameter)
    pub fn bubble_radius(&self) -> f32 {
        self.width() / 2.0
    }

    /// True when there is no area to draw into
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// The four corners, clockwise from the top-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min_x(), self.min_y()),
            Vec2::new(self.max_x(), self.min_y()),
            Vec2::new(self.max_x(), self.max_y()),
            Vec2::new(self.min_x(), self.max_y()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_derived_values() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
        assert_eq!(rect.bottom_left(), Vec2::new(10.0, 60.0));
        assert!((rect.diagonal() - 50.0).abs() < 1e-5);
        assert_eq!(rect.bubble_radius(), 15.0);
    }

    #[test]
    fn test_rect_empty() {
        assert!(Rect::from_size(0.0, 10.0).is_empty());
        assert!(Rect::from_size(10.0, -1.0).is_empty());
        assert!(Rect::from_size(f32::NAN, 10.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }
}
