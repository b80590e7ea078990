use std::f64::consts::{PI, TAU};

use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (y-up).
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the index of the vertex with the largest x, ties broken by the
/// largest y. Such a vertex is always convex for a simple polygon.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn lexicographic_max(points: &[Point2]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)))
        .map(|(i, _)| i)
}

/// Determinant of the triangle `(a, b, c)`: twice its signed area.
///
/// Positive when `a → b → c` turns left (y-up).
#[must_use]
pub fn triangle_determinant(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b - a).perp(&(c - b))
}

/// Signed angle from `v1` to `v2`, in `(-π, π]`.
#[must_use]
pub fn vertex_angle(v1: &Vector2, v2: &Vector2) -> f64 {
    let angle = v1.perp(v2).atan2(v1.dot(v2));
    if angle <= -PI {
        angle + TAU
    } else {
        angle
    }
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroLengthSegment` (tagged with `index`) if the
/// segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2, index: usize) -> Result<Vector2> {
    (b - a)
        .try_normalize(TOLERANCE)
        .ok_or_else(|| GeometryError::ZeroLengthSegment { index }.into())
}

/// Returns the left-pointing normal of a direction vector (y-up).
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}
