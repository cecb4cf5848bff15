//! Render settings
//!
//! Stored as JSON. Missing fields fall back to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bubble::BubbleStyle;
use crate::color::Color;
use crate::consts::{
    DEFAULT_CANVAS_SIZE, DEFAULT_STRIPE_ALPHA, DEFAULT_STRIPE_FRACTION, MAX_CANVAS_SIZE,
    MIN_STRIPE_WIDTH,
};
use crate::error::{BubbleError, Result};
use crate::geometry::Rect;
use crate::view::BubbleView;

/// Settings for rendering one bubble image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    // === Canvas ===
    /// Canvas width in pixels (also the bubble diameter)
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Color behind the bubble
    pub background: Color,

    // === Bubble ===
    pub bubble_color: Color,
    pub stripe_color: Color,
    /// Stripe width as a fraction of the bubble radius
    pub stripe_fraction: f32,
    /// Absolute stripe width in pixels, overrides `stripe_fraction`
    pub stripe_width: Option<f32>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            background: Color::CLEAR,

            bubble_color: Color::ORANGE,
            stripe_color: Color::BLACK.with_alpha(DEFAULT_STRIPE_ALPHA),
            stripe_fraction: DEFAULT_STRIPE_FRACTION,
            stripe_width: None,
        }
    }
}

impl RenderSettings {
    /// Check that the settings describe something drawable
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BubbleError::InvalidSettings(format!(
                "canvas must not be empty (got {}x{})",
                self.width, self.height
            )));
        }
        if self.width > MAX_CANVAS_SIZE || self.height > MAX_CANVAS_SIZE {
            return Err(BubbleError::InvalidSettings(format!(
                "canvas is larger than {max}x{max} (got {}x{})",
                self.width,
                self.height,
                max = MAX_CANVAS_SIZE
            )));
        }

        let width = self.stripe_width();
        if !(width.is_finite() && width >= MIN_STRIPE_WIDTH) {
            return Err(BubbleError::InvalidSettings(format!(
                "stripe width must be at least {} (got {})",
                MIN_STRIPE_WIDTH, width
            )));
        }

        Ok(())
    }

    /// Bubble bounds, the whole canvas
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width as f32, self.height as f32)
    }

    /// Effective stripe width in pixels
    pub fn stripe_width(&self) -> f32 {
        self.stripe_width
            .unwrap_or_else(|| self.bounds().bubble_radius() * self.stripe_fraction)
    }

    pub fn style(&self) -> BubbleStyle {
        BubbleStyle {
            bubble_color: self.bubble_color,
            stripe_color: self.stripe_color,
            stripe_width: self.stripe_width(),
        }
    }

    /// View configured with these colors and proportions
    pub fn view(&self) -> BubbleView {
        let view = BubbleView::new(self.bounds())
            .with_bubble_color(self.bubble_color)
            .with_stripe_color(self.stripe_color)
            .with_stripe_fraction(self.stripe_fraction);

        match self.stripe_width {
            Some(width) => view.with_stripe_width(width),
            None => view,
        }
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| BubbleError::io(path, e))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings if a file is given and readable, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::load(path) {
                Ok(settings) => return settings,
                Err(e) => log::warn!("{}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| BubbleError::io(path, e))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
