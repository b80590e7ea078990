use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, ParameterError, Result};
use crate::geometry::{Contour, Orientation};
use crate::math::polygon_2d::vertex_angle;
use crate::math::TOLERANCE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a vertex points out of the outline or into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VertexKind {
    /// Convex corner: the cut is half the turning angle.
    Salient,
    /// Reflex corner: the cut is the supplement of half the angle.
    Reentrant,
}

/// Angles and length of segment `index` (`P[i] → P[i+1]`), measured at its
/// terminal vertex `P[i+1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentAngle {
    pub index: usize,
    /// Segment length in output units.
    pub length: f64,
    /// Angle from `P[i] - P[i+1]` to `P[i+2] - P[i+1]` in radians, as listed.
    pub raw_angle: f64,
    /// `raw_angle` times the orientation sign, in `(-π, π]`. Positive at
    /// convex vertices.
    pub turn_angle: f64,
    /// Mitre saw angle in degrees.
    pub cut_angle: f64,
    pub kind: VertexKind,
}

impl SegmentAngle {
    fn new(index: usize, length: f64, raw_angle: f64, orientation: Orientation) -> Self {
        let mut turn_angle = orientation.sign() * raw_angle;
        if turn_angle <= -PI {
            turn_angle += TAU;
        }
        let degrees = turn_angle.to_degrees();
        let (kind, cut_angle) = if degrees >= 0.0 {
            (VertexKind::Salient, degrees / 2.0)
        } else {
            (VertexKind::Reentrant, 180.0 + degrees / 2.0)
        };
        Self {
            index,
            length,
            raw_angle,
            turn_angle,
            cut_angle,
            kind,
        }
    }

    #[must_use]
    pub fn turn_angle_degrees(&self) -> f64 {
        self.turn_angle.to_degrees()
    }

    /// Exterior turn at the terminal vertex, positive at convex corners.
    /// Sums to `2π` over a simple closed contour.
    #[must_use]
    pub fn deflection(&self) -> f64 {
        match self.kind {
            VertexKind::Salient => PI - self.turn_angle,
            VertexKind::Reentrant => -PI - self.turn_angle,
        }
    }
}

/// Per-vertex angles, lengths and orientation of a [`Contour`].
#[derive(Debug, Clone)]
pub struct ContourAnalysis<'a> {
    contour: &'a Contour,
    orientation: Orientation,
    output_scale: f64,
    segments: Vec<SegmentAngle>,
    total_length: f64,
}

impl<'a> ContourAnalysis<'a> {
    #[must_use]
    pub fn contour(&self) -> &'a Contour {
        self.contour
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Output units per contour unit.
    #[must_use]
    pub fn output_scale(&self) -> f64 {
        self.output_scale
    }

    #[must_use]
    pub fn segments(&self) -> &[SegmentAngle] {
        &self.segments
    }

    /// Outline length in output units.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Sum of the per-vertex deflections, `2π` for a simple contour.
    #[must_use]
    pub fn total_deflection(&self) -> f64 {
        self.segments.iter().map(SegmentAngle::deflection).sum()
    }
}

/// Measures every vertex of a contour.
///
/// For each segment `i`, with `v1 = P[i] - P[i+1]` and `v2 = P[i+2] - P[i+1]`:
/// - length `|v1| * output_scale`
/// - raw angle `atan2(v1 × v2, v1 · v2)`
/// - turn angle: raw angle times the orientation sign
/// - cut: `θ/2` when `θ ≥ 0`, `180° + θ/2` otherwise
#[derive(Debug)]
pub struct AnalyzeContour<'a> {
    contour: &'a Contour,
    output_scale: f64,
}

impl<'a> AnalyzeContour<'a> {
    /// Creates a new analysis with an output scale of 1.
    #[must_use]
    pub fn new(contour: &'a Contour) -> Self {
        Self {
            contour,
            output_scale: 1.0,
        }
    }

    /// Sets the factor converting contour units to output units.
    #[must_use]
    pub fn with_output_scale(mut self, scale: f64) -> Self {
        self.output_scale = scale;
        self
    }

    /// Executes the analysis.
    ///
    /// # Errors
    ///
    /// - `ParameterError::NonPositive` for a non-positive output scale
    /// - `GeometryError::ZeroLengthSegment` naming the segment whose vector
    ///   vanishes
    /// - `GeometryError::DegenerateOrientation` if the contour has no area
    pub fn execute(&self) -> Result<ContourAnalysis<'a>> {
        let output_scale = ParameterError::require_positive("output scale", self.output_scale)?;
        let contour = self.contour;
        let n = contour.vertex_count();

        let mut measured = Vec::with_capacity(n);
        for i in 0..n {
            let vertex = contour.vertex(i + 1);
            let v1 = contour.vertex(i) - vertex;
            let v2 = contour.vertex(i + 2) - vertex;
            let length = v1.norm();
            if length < TOLERANCE {
                return Err(GeometryError::ZeroLengthSegment { index: i }.into());
            }
            if v2.norm() < TOLERANCE {
                return Err(GeometryError::ZeroLengthSegment { index: (i + 1) % n }.into());
            }
            measured.push((length * output_scale, vertex_angle(&v1, &v2)));
        }

        let orientation = contour.orientation()?;
        let segments: Vec<SegmentAngle> = measured
            .into_iter()
            .enumerate()
            .map(|(i, (length, raw))| SegmentAngle::new(i, length, raw, orientation))
            .collect();
        for s in &segments {
            tracing::trace!(
                index = s.index,
                length = s.length,
                angle = s.turn_angle_degrees(),
                cut = s.cut_angle,
                "vertex measured"
            );
        }
        let total_length = segments.iter().map(|s| s.length).sum();

        tracing::debug!(
            segments = n,
            ?orientation,
            total_length,
            "analyzed contour"
        );
        Ok(ContourAnalysis {
            contour,
            orientation,
            output_scale,
            segments,
            total_length,
        })
    }
}
