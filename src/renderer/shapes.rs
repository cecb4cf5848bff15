//! Shape flattening and coverage tests for the software rasterizer

use glam::{Affine2, Vec2};
use std::f32::consts::TAU;

use crate::canvas::ArcDirection;
use crate::consts::{ARC_SEGMENTS_PER_RADIAN, MIN_ARC_SEGMENTS};
use crate::polar_to_cartesian;

/// Signed sweep of an arc from `start` to `end` in the given direction
///
/// Anything spanning a full turn or more becomes exactly one turn.
pub fn arc_sweep(start: f32, end: f32, direction: ArcDirection) -> f32 {
    let delta = end - start;
    if delta.abs() >= TAU {
        return match direction {
            ArcDirection::CounterClockwise => TAU,
            ArcDirection::Clockwise => -TAU,
        };
    }

    match direction {
        ArcDirection::CounterClockwise => delta.rem_euclid(TAU),
        ArcDirection::Clockwise => -(-delta).rem_euclid(TAU),
    }
}

/// Generate points along an arc, both endpoints included, mapped by `transform`
pub fn arc_points(
    center: Vec2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    direction: ArcDirection,
    transform: &Affine2,
) -> Vec<Vec2> {
    let sweep = arc_sweep(start_angle, end_angle, direction);
    let segments = ((sweep.abs() * ARC_SEGMENTS_PER_RADIAN).ceil() as u32).max(MIN_ARC_SEGMENTS);

    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let theta = start_angle + t * sweep;
            transform.transform_point2(polar_to_cartesian(center, radius, theta))
        })
        .collect()
}

/// Winding number of a closed polygon around `p`
pub fn winding_number(polygon: &[Vec2], p: Vec2) -> i32 {
    if polygon.len() < 3 {
        return 0;
    }

    let mut winding = 0;
    for (i, &a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let side = (b - a).perp_dot(p - a);

        if a.y <= p.y {
            if b.y > p.y && side > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Whether `p` lies inside a set of subpaths (non-zero rule, implicitly closed)
pub fn inside_nonzero(subpaths: &[Vec<Vec2>], p: Vec2) -> bool {
    subpaths.iter().map(|poly| winding_number(poly, p)).sum::<i32>() != 0
}

/// Whether `p` is covered by a butt-capped stroke of `half_width` along `a`..`b`
pub fn segment_covers(a: Vec2, b: Vec2, half_width: f32, p: Vec2) -> bool {
    let dir = b - a;
    let len = dir.length();
    if len <= f32::EPSILON {
        return false;
    }
    let dir = dir / len;

    let along = (p - a).dot(dir);
    let across = dir.perp_dot(p - a).abs();
    along >= 0.0 && along <= len && across <= half_width
}

/// Device-space bounding box (min, max) of a butt-capped segment
pub fn segment_bounds(a: Vec2, b: Vec2, half_width: f32) -> (Vec2, Vec2) {
    let dir = (b - a).normalize_or_zero();
    let offset = dir.perp() * half_width;
    let corners = [a + offset, a - offset, b + offset, b - offset];
    bounds_of(&corners)
}

/// Bounding box (min, max) of a set of points
pub fn bounds_of(points: &[Vec2]) -> (Vec2, Vec2) {
    points.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), &p| (min.min(p), max.max(p)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_arc_sweep() {
        assert_eq!(arc_sweep(0.0, TAU, ArcDirection::Clockwise), -TAU);
        assert_eq!(arc_sweep(0.0, TAU, ArcDirection::CounterClockwise), TAU);
        let quarter = arc_sweep(0.0, PI / 2.0, ArcDirection::CounterClockwise);
        assert!((quarter - PI / 2.0).abs() < 1e-6);
        assert!((arc_sweep(0.0, PI / 2.0, ArcDirection::Clockwise) + 1.5 * PI).abs() < 1e-5);
    }

    #[test]
    fn test_circle_points_on_radius() {
        let center = Vec2::new(50.0, 50.0);
        let points = arc_points(
            center,
            20.0,
            0.0,
            TAU,
            ArcDirection::Clockwise,
            &Affine2::IDENTITY,
        );
        assert!(points.len() > 100);
        for p in &points {
            assert!(((*p - center).length() - 20.0).abs() < 1e-3);
        }
        // Closed loop
        assert!((points[0] - *points.last().unwrap()).length() < 1e-3);
    }

    #[test]
    fn test_short_arc_minimum_segments() {
        let points = arc_points(
            Vec2::ZERO,
            1.0,
            0.0,
            0.01,
            ArcDirection::CounterClockwise,
            &Affine2::IDENTITY,
        );
        assert_eq!(points.len(), MIN_ARC_SEGMENTS as usize + 1);
    }

    #[test]
    fn test_winding_square() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert_ne!(winding_number(&square, Vec2::new(5.0, 5.0)), 0);
        assert_eq!(winding_number(&square, Vec2::new(15.0, 5.0)), 0);
        assert!(inside_nonzero(&[square.clone()], Vec2::new(1.0, 9.0)));
        assert!(!inside_nonzero(&[], Vec2::new(1.0, 9.0)));
    }

    #[test]
    fn test_segment_covers_butt_caps() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(segment_covers(a, b, 2.0, Vec2::new(5.0, 1.5)));
        assert!(!segment_covers(a, b, 2.0, Vec2::new(5.0, 2.5)));
        // No caps past the ends
        assert!(!segment_covers(a, b, 2.0, Vec2::new(-0.5, 0.0)));
        assert!(!segment_covers(a, b, 2.0, Vec2::new(10.5, 0.0)));
        assert!(!segment_covers(a, a, 2.0, a));
    }

    #[test]
    fn test_segment_bounds_diagonal() {
        let (min, max) = segment_bounds(Vec2::ZERO, Vec2::new(10.0, 10.0), 1.0);
        assert!(min.x < 0.0 && min.y < 0.0);
        assert!(max.x > 10.0 && max.y > 10.0);
    }
}
