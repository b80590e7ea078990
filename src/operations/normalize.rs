use crate::error::{GeometryError, ParameterError, Result};
use crate::geometry::{Bounds, Contour};
use crate::math::{Point2, Rotation2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the linear scale factor is derived from the raw outline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScaleSpec {
    /// The finished outline is this wide.
    Width(f64),
    /// The finished outline is this tall.
    Height(f64),
    /// The larger of width and height equals this.
    MajorDimension(f64),
    /// Raw units are multiplied by this factor.
    Factor(f64),
}

impl ScaleSpec {
    /// Returns the factor that maps raw units onto output units.
    fn factor(self, bounds: &Bounds) -> Result<f64> {
        let (parameter, target, reference) = match self {
            Self::Width(w) => ("width", w, bounds.width()),
            Self::Height(h) => ("height", h, bounds.height()),
            Self::MajorDimension(d) => ("major dimension", d, bounds.major_dimension()),
            Self::Factor(k) => return ParameterError::require_positive("scale factor", k),
        };
        Ok(ParameterError::require_positive(parameter, target)? / reference)
    }
}

impl Default for ScaleSpec {
    fn default() -> Self {
        Self::Factor(1.0)
    }
}

/// Parameters of the raw → output coordinate mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizeConfig {
    /// Output size.
    pub scale: ScaleSpec,
    /// Counter-clockwise rotation in radians, applied to the raw points
    /// about the origin before anything else.
    pub rotation: f64,
    /// Mirror y, for points surveyed in an image whose y axis grows downward.
    pub flip_vertical: bool,
    /// Offset added after scaling. The bounding box minimum otherwise lands
    /// on the origin.
    pub translation: Vector2,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            scale: ScaleSpec::default(),
            rotation: 0.0,
            flip_vertical: false,
            translation: Vector2::zeros(),
        }
    }
}

impl NormalizeConfig {
    /// Configuration producing an outline of the given output width.
    #[must_use]
    pub fn with_width(width: f64) -> Self {
        Self {
            scale: ScaleSpec::Width(width),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scale(mut self, scale: ScaleSpec) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn rotation(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }

    #[must_use]
    pub fn flip_vertical(mut self, flip: bool) -> Self {
        self.flip_vertical = flip;
        self
    }

    #[must_use]
    pub fn translation(mut self, translation: Vector2) -> Self {
        self.translation = translation;
        self
    }
}

/// Maps raw surveyed points (pixels, arbitrary units) onto a [`Contour`] in
/// output units.
///
/// # Steps
///
/// 1. Rotate about the origin by `rotation`
/// 2. Mirror y if `flip_vertical`
/// 3. Move the bounding box minimum to the origin
/// 4. Scale uniformly per [`ScaleSpec`]
/// 5. Add `translation`
#[derive(Debug)]
pub struct Normalize {
    config: NormalizeConfig,
}

impl Normalize {
    /// Creates a new normalization operation.
    #[must_use]
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Executes the mapping. The input is left untouched.
    ///
    /// # Errors
    ///
    /// - `GeometryError::TooFewPoints` for fewer than 3 points
    /// - `GeometryError::ZeroExtent` if the points span no width or no height
    /// - `ParameterError::NonPositive` for a non-positive scale target
    /// - any [`Contour::new`] error on the mapped points
    pub fn execute(&self, raw: &[Point2]) -> Result<Contour> {
        if raw.len() < 3 {
            return Err(GeometryError::TooFewPoints { count: raw.len() }.into());
        }

        let rotation = Rotation2::new(self.config.rotation);
        let oriented: Vec<Point2> = raw
            .iter()
            .map(|p| {
                let q = rotation * *p;
                if self.config.flip_vertical {
                    Point2::new(q.x, -q.y)
                } else {
                    q
                }
            })
            .collect();

        let bounds = Bounds::of(&oriented).ok_or(GeometryError::TooFewPoints { count: 0 })?;
        if bounds.width() <= 0.0 {
            return Err(GeometryError::ZeroExtent { axis: "width" }.into());
        }
        if bounds.height() <= 0.0 {
            return Err(GeometryError::ZeroExtent { axis: "height" }.into());
        }

        let factor = self.config.scale.factor(&bounds)?;
        let origin = bounds.min;
        let points = oriented
            .into_iter()
            .map(|p| Point2::from((p - origin) * factor + self.config.translation))
            .collect();

        tracing::debug!(
            count = raw.len(),
            factor,
            "normalized {:.3} x {:.3} raw outline",
            bounds.width(),
            bounds.height()
        );
        Contour::new(points)
    }
}
