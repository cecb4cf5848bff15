//! RGBA colors and compositing

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color, components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Clamp every component into [0, 1] (NaN becomes 0)
    pub fn clamped(self) -> Self {
        fn unit(v: f32) -> f32 {
            if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
        }
        Self::rgba(unit(self.r), unit(self.g), unit(self.b), unit(self.a))
    }

    /// Composite `self` over `dst` (source-over, straight alpha)
    pub fn over(self, dst: Color) -> Color {
        let src = self.clamped();
        let out_a = src.a + dst.a * (1.0 - src.a);
        if out_a <= 0.0 {
            return Color::CLEAR;
        }

        let mix = |s: f32, d: f32| (s * src.a + d * dst.a * (1.0 - src.a)) / out_a;
        Color::rgba(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), out_a)
    }

    /// Quantize to 8 bits per channel
    pub fn to_rgba8(self) -> Rgba8 {
        let c = self.clamped();
        let q = |v: f32| (v * 255.0).round() as u8;
        Rgba8 {
            r: q(c.r),
            g: q(c.g),
            b: q(c.b),
            a: q(c.a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::CLEAR
    }
}

/// 8-bit RGBA pixel, laid out for direct byte casting
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}
