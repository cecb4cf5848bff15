//! Deterministic CPU rasterizer implementing [`GraphicsContext`]
//!
//! Coverage is decided by sampling each pixel at its center, with no
//! anti-aliasing, so the same commands always produce the same pixels.

use std::path::Path;

use glam::{Affine2, Vec2};

use super::shapes::{arc_points, bounds_of, inside_nonzero, segment_bounds, segment_covers};
use crate::canvas::{ArcDirection, GraphicsContext};
use crate::color::{Color, Rgba8};
use crate::error::BubbleError;
use crate::geometry::Rect;

/// Graphics state saved and restored as a unit
#[derive(Debug, Clone)]
struct CanvasState {
    transform: Affine2,
    stroke_width: f32,
    stroke_color: Color,
    /// Every region is intersected; each region is a set of device-space subpaths
    clip: Vec<Vec<Vec<Vec2>>>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            stroke_width: 1.0,
            stroke_color: Color::BLACK,
            clip: Vec::new(),
        }
    }
}

/// A pixel grid (y-down) that can be drawn on through [`GraphicsContext`]
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    state: CanvasState,
    saved: Vec<CanvasState>,
    /// Current path in device space
    path: Vec<Vec<Vec2>>,
}

impl PixelCanvas {
    /// Transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::CLEAR)
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background.clamped(); width as usize * height as usize],
            state: CanvasState::default(),
            saved: Vec::new(),
            path: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at a pixel, `None` when out of range
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Depth of the save stack
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }

    /// Current transform (user space to device space)
    pub fn transform(&self) -> Affine2 {
        self.state.transform
    }

    /// Convert to an 8-bit RGBA image
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage, BubbleError> {
        let pixels: Vec<Rgba8> = self.pixels.iter().map(|c| c.to_rgba8()).collect();
        let bytes = bytemuck::cast_slice::<Rgba8, u8>(&pixels).to_vec();
        image::RgbaImage::from_raw(self.width, self.height, bytes).ok_or(
            BubbleError::ImageBuffer {
                width: self.width,
                height: self.height,
            },
        )
    }

    /// Write the canvas as a PNG file
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), BubbleError> {
        let path = path.as_ref();
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        log::info!("Wrote {}x{} PNG to {}", self.width, self.height, path.display());
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn clip_allows(&self, p: Vec2) -> bool {
        self.state
            .clip
            .iter()
            .all(|region| inside_nonzero(region, p))
    }

    /// Pixel range covering a device-space box, clamped to the canvas
    fn pixel_span(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        if !(min.is_finite() && max.is_finite()) {
            return None;
        }
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(self.width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    /// Composite `color` over every pixel in the box whose center passes `covers`
    fn paint<F>(&mut self, min: Vec2, max: Vec2, color: Color, covers: F)
    where
        F: Fn(Vec2) -> bool,
    {
        let Some((x0, y0, x1, y1)) = self.pixel_span(min, max) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if covers(p) && self.clip_allows(p) {
                    let i = self.index(x, y);
                    self.pixels[i] = color.over(self.pixels[i]);
                }
            }
        }
    }

    /// Stroke width in device space (the transform may scale)
    fn device_stroke_width(&self) -> f32 {
        self.state.stroke_width * self.state.transform.matrix2.determinant().abs().sqrt()
    }
}

impl GraphicsContext for PixelCanvas {
    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }

        let transform = self.state.transform;
        let inverse = transform.inverse();
        if !inverse.is_finite() {
            return;
        }

        let corners = rect.corners().map(|c| transform.transform_point2(c));
        let (min, max) = bounds_of(&corners);
        let center = rect.center();
        let radii = rect.size / 2.0;

        self.paint(min, max, color, |p| {
            let q = (inverse.transform_point2(p) - center) / radii;
            q.length_squared() <= 1.0
        });
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn add_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        direction: ArcDirection,
    ) {
        let points = arc_points(
            center,
            radius,
            start_angle,
            end_angle,
            direction,
            &self.state.transform,
        );

        // An open subpath is joined to the arc start with a line
        match self.path.last_mut() {
            Some(subpath) if !subpath.is_empty() => subpath.extend(points),
            _ => self.path.push(points),
        }
    }

    fn clip(&mut self) {
        let region = std::mem::take(&mut self.path);
        self.state.clip.push(region);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform = self.state.transform * Affine2::from_translation(Vec2::new(dx, dy));
    }

    fn rotate(&mut self, angle: f32) {
        self.state.transform = self.state.transform * Affine2::from_angle(angle);
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.state.stroke_width = width;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn move_to(&mut self, point: Vec2) {
        let p = self.state.transform.transform_point2(point);
        self.path.push(vec![p]);
    }

    fn line_to(&mut self, point: Vec2) {
        let p = self.state.transform.transform_point2(point);
        match self.path.last_mut() {
            Some(subpath) => subpath.push(p),
            None => self.path.push(vec![p]),
        }
    }

    fn stroke_path(&mut self) {
        let path = std::mem::take(&mut self.path);
        let half_width = self.device_stroke_width() / 2.0;
        if !(half_width > 0.0) {
            return;
        }

        let segments: Vec<(Vec2, Vec2)> = path
            .iter()
            .flat_map(|subpath| subpath.windows(2).map(|w| (w[0], w[1])))
            .collect();
        if segments.is_empty() {
            return;
        }

        let (min, max) = segments
            .iter()
            .map(|&(a, b)| segment_bounds(a, b, half_width))
            .fold(
                (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
                |(min, max), (lo, hi)| (min.min(lo), max.max(hi)),
            );

        let color = self.state.stroke_color;
        self.paint(min, max, color, |p| {
            segments
                .iter()
                .any(|&(a, b)| segment_covers(a, b, half_width, p))
        });
    }

    fn save_state(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore_state(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => log::warn!("restore_state without a matching save_state"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_fill_ellipse_stays_inside() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.fill_ellipse(Rect::from_size(20.0, 20.0), Color::ORANGE);

        assert_eq!(canvas.pixel(10, 10), Some(Color::ORANGE));
        assert_eq!(canvas.pixel(0, 0), Some(Color::CLEAR));
        assert_eq!(canvas.pixel(19, 19), Some(Color::CLEAR));
        assert_eq!(canvas.pixel(20, 0), None);
    }

    #[test]
    fn test_fill_empty_rect_paints_nothing() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.fill_ellipse(Rect::from_size(0.0, 8.0), Color::ORANGE);
        assert!((0..8).all(|y| (0..8).all(|x| canvas.pixel(x, y) == Some(Color::CLEAR))));
    }

    #[test]
    fn test_stroke_horizontal_line() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.set_stroke_width(2.0);
        canvas.set_stroke_color(Color::WHITE);
        canvas.move_to(Vec2::new(0.0, 5.0));
        canvas.line_to(Vec2::new(10.0, 5.0));
        canvas.stroke_path();

        assert_eq!(canvas.pixel(3, 4), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 5), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 6), Some(Color::CLEAR));
        assert_eq!(canvas.pixel(3, 3), Some(Color::CLEAR));
    }

    #[test]
    fn test_stroke_consumes_path() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.set_stroke_color(Color::BLACK.with_alpha(0.5));
        canvas.move_to(Vec2::new(0.0, 5.0));
        canvas.line_to(Vec2::new(10.0, 5.0));
        canvas.stroke_path();
        let once = canvas.pixel(4, 5);
        canvas.stroke_path();
        assert_eq!(canvas.pixel(4, 5), once);
    }

    #[test]
    fn test_overlapping_segments_blend_once() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.set_stroke_width(4.0);
        canvas.set_stroke_color(Color::BLACK.with_alpha(0.5));
        canvas.move_to(Vec2::new(0.0, 5.0));
        canvas.line_to(Vec2::new(6.0, 5.0));
        canvas.line_to(Vec2::new(10.0, 5.0));
        canvas.stroke_path();

        let alpha = canvas.pixel(5, 5).map(|c| c.a).unwrap_or_default();
        assert!((alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_clip_to_circle() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.begin_path();
        canvas.add_arc(Vec2::new(10.0, 10.0), 5.0, 0.0, TAU, ArcDirection::Clockwise);
        canvas.clip();
        canvas.fill_ellipse(Rect::from_size(20.0, 20.0), Color::ORANGE);

        assert_eq!(canvas.pixel(10, 10), Some(Color::ORANGE));
        assert_eq!(canvas.pixel(10, 2), Some(Color::CLEAR));
        assert_eq!(canvas.pixel(3, 10), Some(Color::CLEAR));
    }

    #[test]
    fn test_empty_clip_blocks_everything() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.begin_path();
        canvas.clip();
        canvas.fill_ellipse(Rect::from_size(4.0, 4.0), Color::ORANGE);
        assert_eq!(canvas.pixel(2, 2), Some(Color::CLEAR));
    }

    #[test]
    fn test_restore_state_undoes_clip_and_transform() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.save_state();
        canvas.begin_path();
        canvas.add_arc(Vec2::new(2.0, 2.0), 1.0, 0.0, TAU, ArcDirection::Clockwise);
        canvas.clip();
        canvas.translate(5.0, 5.0);
        canvas.rotate(1.0);
        assert_eq!(canvas.saved_depth(), 1);
        canvas.restore_state();

        assert_eq!(canvas.saved_depth(), 0);
        assert_eq!(canvas.transform(), Affine2::IDENTITY);
        canvas.fill_ellipse(Rect::from_size(20.0, 20.0), Color::ORANGE);
        assert_eq!(canvas.pixel(10, 10), Some(Color::ORANGE));
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.translate(1.0, 1.0);
        canvas.restore_state();
        assert_eq!(
            canvas.transform(),
            Affine2::from_translation(Vec2::new(1.0, 1.0))
        );
    }

    #[test]
    fn test_transform_maps_stroke() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.translate(0.0, 8.0);
        canvas.set_stroke_width(2.0);
        canvas.set_stroke_color(Color::WHITE);
        canvas.move_to(Vec2::ZERO);
        canvas.line_to(Vec2::new(10.0, 0.0));
        canvas.stroke_path();

        assert_eq!(canvas.pixel(5, 7), Some(Color::WHITE));
        assert_eq!(canvas.pixel(5, 2), Some(Color::CLEAR));
    }

    #[test]
    fn test_rgba_image_bytes() {
        let canvas = PixelCanvas::with_background(3, 2, Color::ORANGE);
        let image = canvas.to_rgba_image().unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1).0, [255, 128, 0, 255]);
    }
}
