use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{lexicographic_max, signed_area_2d, triangle_determinant};
use crate::math::{Point2, TOLERANCE};

use super::Bounds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Winding sense of a closed contour, in the y-up convention.
///
/// The sign flips the raw vertex angles so that convex corners come out
/// positive and orients every inward offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Sign `+1`.
    Clockwise,
    /// Sign `-1`.
    CounterClockwise,
}

impl Orientation {
    /// Returns `+1.0` for clockwise, `-1.0` for counter-clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }

    /// Orientation of a left (positive) or right (negative) turn.
    fn from_turn(det: f64) -> Self {
        if det > 0.0 {
            Self::CounterClockwise
        } else {
            Self::Clockwise
        }
    }
}

/// A closed outline: an ordered, cyclic list of at least 3 points where no
/// two consecutive points coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<Point2>,
    bounds: Bounds,
}

impl Contour {
    /// Creates a contour from an ordered point list. The last point connects
    /// back to the first; do not repeat it.
    ///
    /// # Errors
    ///
    /// - `GeometryError::TooFewPoints` for fewer than 3 points
    /// - `GeometryError::NonFinite` for NaN or infinite coordinates
    /// - `GeometryError::ZeroLengthSegment` when a point coincides with its
    ///   successor (including last → first)
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(GeometryError::TooFewPoints { count: n }.into());
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeometryError::NonFinite { index }.into());
        }
        for i in 0..n {
            let j = (i + 1) % n;
            if (points[j] - points[i]).norm() < TOLERANCE {
                return Err(GeometryError::ZeroLengthSegment { index: i }.into());
            }
        }
        let bounds = Bounds::of(&points).ok_or(GeometryError::TooFewPoints { count: n })?;
        Ok(Self { points, bounds })
    }

    /// Creates a contour from `(x, y)` pairs, the form point editors persist.
    ///
    /// # Errors
    ///
    /// Same as [`Contour::new`].
    pub fn from_xy(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(pairs.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of vertices, which is also the number of segments.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the vertex at `index`, wrapping around.
    #[must_use]
    pub fn vertex(&self, index: usize) -> &Point2 {
        &self.points[index % self.points.len()]
    }

    /// Returns the endpoints of segment `index`: `P[i] → P[i+1 mod n]`.
    #[must_use]
    pub fn segment(&self, index: usize) -> (Point2, Point2) {
        (*self.vertex(index), *self.vertex(index + 1))
    }

    /// Sum of the segment lengths, in the contour's own units.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        (0..self.vertex_count())
            .map(|i| {
                let (a, b) = self.segment(i);
                (b - a).norm()
            })
            .sum()
    }

    /// Bounding box, computed once at construction.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The same closed outline listed from vertex `start` onwards.
    #[must_use]
    pub fn starting_at(&self, start: usize) -> Self {
        let mut points = self.points.clone();
        points.rotate_left(start % self.points.len());
        Self {
            points,
            bounds: self.bounds,
        }
    }

    /// Determines the winding sense from the lexicographically largest vertex
    /// (largest x, then largest y), which is convex on any simple polygon.
    ///
    /// When that vertex is a spike (its neighbours are collinear with it),
    /// the shoelace area decides instead. Both tests are relative to the
    /// contour's size, so the result does not depend on the units.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateOrientation` if the contour encloses
    /// no area.
    pub fn orientation(&self) -> Result<Orientation> {
        let n = self.vertex_count();
        let m = lexicographic_max(&self.points).ok_or(GeometryError::DegenerateOrientation)?;
        let prev = self.vertex(m + n - 1);
        let next = self.vertex(m + 1);
        let vertex = &self.points[m];
        let det = triangle_determinant(prev, vertex, next);
        if det.abs() > TOLERANCE * (vertex - prev).norm() * (next - vertex).norm() {
            return Ok(Orientation::from_turn(det));
        }

        let area = signed_area_2d(&self.points);
        if area.abs() > TOLERANCE * self.bounds.major_dimension().powi(2) {
            tracing::debug!(vertex = m, "extreme vertex is flat, orienting by area");
            return Ok(Orientation::from_turn(area));
        }
        Err(GeometryError::DegenerateOrientation.into())
    }
}
