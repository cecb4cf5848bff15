//! Bubble view: the host-facing adapter
//!
//! Holds the view bounds and look, and draws on whatever context the host
//! hands it for the current redraw.

use crate::bubble::{BubbleStyle, bubble_commands, draw_striped_bubble};
use crate::canvas::{DrawCommand, GraphicsContext};
use crate::color::Color;
use crate::consts::{DEFAULT_STRIPE_ALPHA, DEFAULT_STRIPE_FRACTION};
use crate::geometry::Rect;

/// A view that draws a striped bubble filling its bounds
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleView {
    bounds: Rect,
    bubble_color: Color,
    stripe_color: Color,
    /// Stripe width as a fraction of the bubble radius
    stripe_fraction: f32,
    /// Absolute stripe width, wins over `stripe_fraction`
    stripe_width: Option<f32>,
}

impl BubbleView {
    /// Orange bubble with translucent black stripes
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            bubble_color: Color::ORANGE,
            stripe_color: Color::BLACK.with_alpha(DEFAULT_STRIPE_ALPHA),
            stripe_fraction: DEFAULT_STRIPE_FRACTION,
            stripe_width: None,
        }
    }

    pub fn with_bubble_color(mut self, color: Color) -> Self {
        self.bubble_color = color;
        self
    }

    pub fn with_stripe_color(mut self, color: Color) -> Self {
        self.stripe_color = color;
        self
    }

    pub fn with_stripe_fraction(mut self, fraction: f32) -> Self {
        self.stripe_fraction = fraction;
        self.stripe_width = None;
        self
    }

    /// Fixed stripe width that no longer follows the bounds
    pub fn with_stripe_width(mut self, width: f32) -> Self {
        self.stripe_width = Some(width);
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Layout changed; the next draw uses the new bounds
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Stripe width for the current bounds
    pub fn stripe_width(&self) -> f32 {
        self.stripe_width
            .unwrap_or_else(|| self.bounds.bubble_radius() * self.stripe_fraction)
    }

    pub fn style(&self) -> BubbleStyle {
        BubbleStyle {
            bubble_color: self.bubble_color,
            stripe_color: self.stripe_color,
            stripe_width: self.stripe_width(),
        }
    }

    /// Redraw into the current context, if there is one
    pub fn draw(&self, ctx: Option<&mut dyn GraphicsContext>) {
        draw_striped_bubble(ctx, self.bounds, &self.style());
    }

    /// The redraw as data
    pub fn commands(&self) -> Vec<DrawCommand> {
        bubble_commands(self.bounds, &self.style())
    }
}
