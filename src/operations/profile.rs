use std::fmt;

use crate::error::{ParameterError, Result};
use crate::geometry::{Bounds, Contour, Orientation};
use crate::math::Point2;

use super::analyze::{AnalyzeContour, VertexKind};
use super::interior::{InteriorContour, InteriorOffset, MitreJoin};
use super::normalize::{Normalize, NormalizeConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to turn a raw outline into a cutting list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProfileConfig {
    /// Raw → output unit mapping.
    pub normalize: NormalizeConfig,
    /// Strip thickness in output units.
    pub thickness: f64,
    /// Fold-back handling.
    pub mitre: MitreJoin,
    /// Material lost to the saw blade at every cut, in output units.
    pub saw_kerf: f64,
}

impl Default for ProfileConfig {
    /// A 915 mm wide outline in 20 mm stock.
    fn default() -> Self {
        Self {
            normalize: NormalizeConfig::with_width(915.0),
            thickness: 20.0,
            mitre: MitreJoin::Strict,
            saw_kerf: 0.0,
        }
    }
}

impl ProfileConfig {
    #[must_use]
    pub fn normalize(mut self, normalize: NormalizeConfig) -> Self {
        self.normalize = normalize;
        self
    }

    #[must_use]
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    #[must_use]
    pub fn mitre(mut self, mitre: MitreJoin) -> Self {
        self.mitre = mitre;
        self
    }

    #[must_use]
    pub fn saw_kerf(mut self, kerf: f64) -> Self {
        self.saw_kerf = kerf;
        self
    }
}

/// One row of the cutting list: segment `index` and the cut at its end.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentRecord {
    /// Zero-based segment index.
    pub index: usize,
    /// Outer start point, in output units.
    pub start: Point2,
    /// Outer length, in output units.
    pub length: f64,
    pub turn_angle_deg: f64,
    pub cut_angle_deg: f64,
    pub kind: VertexKind,
    /// Inner mitre point at the segment's end, in output units.
    pub interior: Point2,
}

impl fmt::Display for SegmentRecord {
    /// `number length angle° cut°`, numbered from 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:2} {:6.1} {:4.0}° {:4.0}°",
            self.index + 1,
            self.length,
            self.turn_angle_deg,
            self.cut_angle_deg
        )
    }
}

/// Result of a profile computation, ready for renderers and exporters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfileReport {
    pub orientation: Orientation,
    /// Outer outline length.
    pub total_length: f64,
    /// Mid-line length of the strip.
    pub profile_length: f64,
    pub thickness: f64,
    pub saw_kerf: f64,
    /// Bounding box of the outer outline.
    pub extent: Bounds,
    pub segments: Vec<SegmentRecord>,
    pub interior: InteriorContour,
}

impl ProfileReport {
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Stock to buy: profile length plus one saw kerf per cut.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stock_length(&self) -> f64 {
        self.profile_length + self.saw_kerf * self.segments.len() as f64
    }

    /// Width over height of the outer outline.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.extent.aspect_ratio()
    }

    /// Vertices whose mitre was capped.
    #[must_use]
    pub fn capped_vertices(&self) -> &[usize] {
        self.interior.capped_vertices()
    }
}

/// Runs normalization, analysis and interior offset in one go.
#[derive(Debug)]
pub struct ProfileCut {
    config: ProfileConfig,
}

impl ProfileCut {
    /// Creates a new profile computation.
    #[must_use]
    pub fn new(config: ProfileConfig) -> Self {
        Self { config }
    }

    /// Executes the full pipeline on raw surveyed points.
    ///
    /// # Errors
    ///
    /// Any error of [`Normalize`], [`AnalyzeContour`] or [`InteriorOffset`].
    pub fn execute(&self, raw: &[Point2]) -> Result<ProfileReport> {
        let contour = Normalize::new(self.config.normalize).execute(raw)?;
        self.analyze_contour(&contour)
    }

    /// Skips normalization for a contour already in output units.
    ///
    /// # Errors
    ///
    /// Any error of [`AnalyzeContour`] or [`InteriorOffset`], or a negative
    /// saw kerf.
    pub fn analyze_contour(&self, contour: &Contour) -> Result<ProfileReport> {
        let saw_kerf = ParameterError::require_non_negative("saw kerf", self.config.saw_kerf)?;
        let analysis = AnalyzeContour::new(contour).execute()?;
        let interior = InteriorOffset::new(&analysis, self.config.thickness)
            .with_join(self.config.mitre)
            .execute()?;

        let segments = analysis
            .segments()
            .iter()
            .zip(interior.points())
            .map(|(s, &inner)| SegmentRecord {
                index: s.index,
                start: *contour.vertex(s.index),
                length: s.length,
                turn_angle_deg: s.turn_angle_degrees(),
                cut_angle_deg: s.cut_angle,
                kind: s.kind,
                interior: inner,
            })
            .collect();

        let report = ProfileReport {
            orientation: analysis.orientation(),
            total_length: analysis.total_length(),
            profile_length: interior.profile_length(),
            thickness: interior.thickness(),
            saw_kerf,
            extent: contour.bounds(),
            segments,
            interior,
        };
        tracing::info!(
            segments = report.segment_count(),
            outline = report.total_length,
            profile = report.profile_length,
            "profile computed"
        );
        Ok(report)
    }
}
