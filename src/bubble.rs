//! Striped bubble drawing
//!
//! A bubble is a filled disc inscribed in a rectangle, overlaid with diagonal
//! stripes clipped to the same disc. Stripes run from bottom-left to top-right
//! at 45 degrees, `stripe_width` thick with `stripe_width` of space between
//! them.
//!
//! Every function takes the surface as `Option<&mut C>`: `None` means there is
//! no current drawing context and the call does nothing.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::canvas::{ArcDirection, CommandRecorder, DrawCommand, GraphicsContext, ScopedState};
use crate::color::Color;
use crate::consts::STRIPE_ANGLE_DEGREES;
use crate::geometry::Rect;

/// Colors and stripe thickness for one bubble
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleStyle {
    pub bubble_color: Color,
    pub stripe_color: Color,
    pub stripe_width: f32,
}

/// Number of mirrored stripe pairs drawn around the center stripe
///
/// A pair at `index` sits at `±index * stripe_width * 2` and is drawn while
/// its inner edge is still inside the radius.
pub fn stripe_pair_count(bubble_radius: f32, stripe_width: f32) -> usize {
    stripe_offsets(bubble_radius, stripe_width).count()
}

/// Offsets of the mirrored stripe pairs, nearest first
///
/// Empty when `stripe_width` is not a positive finite number.
pub fn stripe_offsets(bubble_radius: f32, stripe_width: f32) -> impl Iterator<Item = f32> {
    let valid = stripe_width.is_finite() && stripe_width > 0.0;

    (1..=u32::MAX)
        .map(move |index| index as f32 * stripe_width * 2.0)
        .take_while(move |offset| valid && offset - stripe_width / 2.0 < bubble_radius)
}

/// Fill the disc inscribed in `rect`
pub fn fill_disc<C>(ctx: Option<&mut C>, rect: Rect, color: Color)
where
    C: GraphicsContext + ?Sized,
{
    let Some(ctx) = ctx else {
        log::trace!("fill_disc: no drawing context");
        return;
    };

    ctx.fill_ellipse(rect, color);
}

/// Draw 45 degree stripes across `rect`, clipped to its inscribed disc
///
/// Lines are always full length (the rectangle diagonal) and rely on the clip
/// to trim them. Clip, transform and stroke settings are restored on return.
pub fn draw_stripes<C>(ctx: Option<&mut C>, rect: Rect, stripe_color: Color, stripe_width: f32)
where
    C: GraphicsContext + ?Sized,
{
    let Some(ctx) = ctx else {
        log::trace!("draw_stripes: no drawing context");
        return;
    };

    if !(stripe_width.is_finite() && stripe_width > 0.0) {
        log::debug!("draw_stripes: skipping, stripe width {} is not positive", stripe_width);
        return;
    }

    let bubble_radius = rect.bubble_radius();
    let max_path_length = rect.diagonal();

    let mut ctx = ScopedState::new(ctx);

    ctx.begin_path();
    ctx.add_arc(rect.center(), bubble_radius, 0.0, TAU, ArcDirection::Clockwise);
    ctx.clip();

    // Pivot around the bottom-left corner so +x runs up and to the right
    let corner = rect.bottom_left();
    ctx.translate(corner.x, corner.y);
    ctx.rotate(STRIPE_ANGLE_DEGREES.to_radians());

    ctx.set_stroke_width(stripe_width);
    ctx.set_stroke_color(stripe_color);

    // Center stripe has no mirror
    stroke_stripe(&mut *ctx, 0.0, max_path_length);

    let mut pairs = 0;
    for offset in stripe_offsets(bubble_radius, stripe_width) {
        stroke_stripe(&mut *ctx, offset, max_path_length);
        stroke_stripe(&mut *ctx, -offset, max_path_length);
        pairs += 1;
    }

    log::trace!(
        "draw_stripes: radius={} width={} pairs={}",
        bubble_radius,
        stripe_width,
        pairs
    );
}

fn stroke_stripe<C>(ctx: &mut C, y: f32, length: f32)
where
    C: GraphicsContext + ?Sized,
{
    ctx.move_to(Vec2::new(0.0, y));
    ctx.line_to(Vec2::new(length, y));
    ctx.stroke_path();
}

/// Fill the bubble, then stripe it, both within `rect`
pub fn draw_striped_bubble<C>(mut ctx: Option<&mut C>, rect: Rect, style: &BubbleStyle)
where
    C: GraphicsContext + ?Sized,
{
    fill_disc(ctx.as_deref_mut(), rect, style.bubble_color);
    draw_stripes(ctx, rect, style.stripe_color, style.stripe_width);
}

/// The striped bubble as a list of draw commands
pub fn bubble_commands(rect: Rect, style: &BubbleStyle) -> Vec<DrawCommand> {
    let mut recorder = CommandRecorder::new();
    draw_striped_bubble(Some(&mut recorder), rect, style);
    recorder.into_commands()
}
