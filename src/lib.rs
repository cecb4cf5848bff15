//! Bubble Stripes - a striped bubble drawn with portable 2D draw commands
//!
//! Core modules:
//! - `bubble`: Disc filler and stripe renderer (pure drawing logic)
//! - `canvas`: Graphics context trait, draw commands, recording
//! - `renderer`: Deterministic software rasterizer
//! - `view`: Host view adapter with the default bubble look
//! - `settings`: JSON render configuration

pub mod bubble;
pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod settings;
pub mod view;

pub use bubble::{BubbleStyle, bubble_commands, draw_striped_bubble};
pub use canvas::{ArcDirection, CommandRecorder, DrawCommand, GraphicsContext};
pub use color::Color;
pub use error::BubbleError;
pub use geometry::Rect;
pub use renderer::PixelCanvas;
pub use settings::RenderSettings;
pub use view::BubbleView;

use glam::Vec2;

/// Drawing configuration constants
pub mod consts {
    /// Stripe angle (degrees, negative = clockwise in y-down space)
    pub const STRIPE_ANGLE_DEGREES: f32 = -45.0;

    /// Default stripe width as a fraction of the bubble radius
    pub const DEFAULT_STRIPE_FRACTION: f32 = 0.1;
    /// Default stripe alpha over black
    pub const DEFAULT_STRIPE_ALPHA: f32 = 0.3;

    /// Arc flattening density for the rasterizer
    pub const ARC_SEGMENTS_PER_RADIAN: f32 = 32.0;
    /// Never flatten an arc into fewer segments than this
    pub const MIN_ARC_SEGMENTS: u32 = 4;

    /// Default canvas size (pixels)
    pub const DEFAULT_CANVAS_SIZE: u32 = 200;
    /// Largest canvas side accepted from settings (pixels)
    pub const MAX_CANVAS_SIZE: u32 = 16_384;
    /// Thinnest stripe accepted from settings (pixels)
    pub const MIN_STRIPE_WIDTH: f32 = 0.01;
}

/// Convert polar (r, theta) to cartesian (x, y) around a center
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}
