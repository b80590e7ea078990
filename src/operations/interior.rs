use crate::error::{GeometryError, ParameterError, Result};
use crate::geometry::Contour;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Rotation2, MITRE_TOLERANCE};

use super::analyze::{ContourAnalysis, VertexKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Treatment of vertices where the outline folds back on itself and the
/// mitre point runs off towards infinity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MitreJoin {
    /// Fail with `GeometryError::UnboundedMitre`.
    #[default]
    Strict,
    /// Cap the mitre at this multiple of the thickness (at least 1). The
    /// capped vertices are reported.
    Limit(f64),
}

/// A segment moved inward by the thickness, in contour units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetEdge {
    pub start: Point2,
    pub end: Point2,
}

/// Inner edge of the strip: one mitre point per segment, at the segment's
/// terminal vertex.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InteriorContour {
    points: Vec<Point2>,
    edges: Vec<OffsetEdge>,
    capped: Vec<usize>,
    thickness: f64,
    total_length: f64,
    profile_length: f64,
}

impl InteriorContour {
    /// Mitre points in contour units; `points()[i]` sits at vertex `i + 1`.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Offset edge of every segment.
    #[must_use]
    pub fn edges(&self) -> &[OffsetEdge] {
        &self.edges
    }

    /// Vertices whose mitre was shortened by [`MitreJoin::Limit`].
    #[must_use]
    pub fn capped_vertices(&self) -> &[usize] {
        &self.capped
    }

    /// Strip thickness in output units.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Perimeter of the inner edge in output units.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Mid-line length of the strip in output units.
    ///
    /// Each band between an outer segment and its inner counterpart is a
    /// trapezoid of area `(l_outer + l_inner) * t / 2`. The strip's area over
    /// its thickness is its mid-line length, so the profile length is half the
    /// sum of both perimeters.
    #[must_use]
    pub fn profile_length(&self) -> f64 {
        self.profile_length
    }

    /// The inner edge as a contour of its own.
    ///
    /// # Errors
    ///
    /// Fails if the offset collapsed two mitre points onto each other.
    pub fn to_contour(&self) -> Result<Contour> {
        Contour::new(self.points.clone())
    }
}

/// Builds the inner edge of a constant-thickness strip along an analyzed
/// contour.
///
/// # Algorithm
///
/// For segment `i` with unit vector `e` from `P[i+1]` back to `P[i]`, raw
/// vertex angle `φ` and orientation sign `σ`:
///
/// 1. Offset edge: the segment moved by `σ * t * rot(+90°)(e)`
/// 2. Mitre point: `P[i+1] + σ * t * rot(φ/2)(e) / sin(φ/2)`, the point on
///    the internal bisector at distance `t / |sin(θ/2)|` from the vertex
///
/// The thickness is given in output units and converted back through the
/// analysis' output scale.
#[derive(Debug)]
pub struct InteriorOffset<'a, 'b> {
    analysis: &'b ContourAnalysis<'a>,
    thickness: f64,
    join: MitreJoin,
}

impl<'a, 'b> InteriorOffset<'a, 'b> {
    /// Creates a new offset operation with [`MitreJoin::Strict`].
    #[must_use]
    pub fn new(analysis: &'b ContourAnalysis<'a>, thickness: f64) -> Self {
        Self {
            analysis,
            thickness,
            join: MitreJoin::Strict,
        }
    }

    #[must_use]
    pub fn with_join(mut self, join: MitreJoin) -> Self {
        self.join = join;
        self
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// - `ParameterError` for a negative thickness or a mitre limit below 1
    /// - `GeometryError::UnboundedMitre` at a fold-back vertex under
    ///   [`MitreJoin::Strict`]
    pub fn execute(&self) -> Result<InteriorContour> {
        let thickness = ParameterError::require_non_negative("thickness", self.thickness)?;
        let limit = match self.join {
            MitreJoin::Strict => None,
            MitreJoin::Limit(r) => Some(ParameterError::require_at_least("mitre limit", r, 1.0)?),
        };

        let analysis = self.analysis;
        let contour = analysis.contour();
        let n = contour.vertex_count();
        let scale = analysis.output_scale();
        let sigma = analysis.orientation().sign();
        let t = thickness / scale;

        let mut points = Vec::with_capacity(n);
        let mut edges = Vec::with_capacity(n);
        let mut capped = Vec::new();

        for s in analysis.segments() {
            let i = s.index;
            let (start, end) = contour.segment(i);
            let back = segment_direction(&end, &start, i)?;

            let normal = left_normal(back) * (sigma * t);
            edges.push(OffsetEdge {
                start: start + normal,
                end: end + normal,
            });

            let half = s.raw_angle / 2.0;
            let sin_half = half.sin();
            let vertex = (i + 1) % n;
            let side = if sin_half.abs() < MITRE_TOLERANCE {
                if limit.is_none() {
                    return Err(GeometryError::UnboundedMitre {
                        index: vertex,
                        angle: s.turn_angle_degrees(),
                    }
                    .into());
                }
                // Fold-back: the strip continues into a spike, or around a slit.
                match s.kind {
                    VertexKind::Salient => 1.0,
                    VertexKind::Reentrant => -1.0,
                }
            } else {
                sigma * sin_half.signum()
            };

            let bisector = Rotation2::new(half) * back * side;
            let mut distance = t / sin_half.abs().max(MITRE_TOLERANCE);
            if let Some(r) = limit {
                if distance > r * t {
                    tracing::warn!(
                        vertex,
                        angle = s.turn_angle_degrees(),
                        "mitre capped at {r} x thickness"
                    );
                    distance = r * t;
                    capped.push(vertex);
                }
            }
            points.push(end + bisector * distance);
        }

        let total_length = (0..n)
            .map(|i| (points[(i + 1) % n] - points[i]).norm() * scale)
            .sum::<f64>();
        let profile_length = (analysis.total_length() + total_length) / 2.0;

        tracing::debug!(
            thickness,
            interior_length = total_length,
            profile_length,
            capped = capped.len(),
            "built interior contour"
        );
        Ok(InteriorContour {
            points,
            edges,
            capped,
            thickness,
            total_length,
            profile_length,
        })
    }
}
