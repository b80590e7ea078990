use thiserror::Error;

/// Top-level error type for mitred profile computations.
#[derive(Debug, Error)]
pub enum MitrecutError {
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

impl MitrecutError {
    /// Returns the index of the vertex that made the contour unusable, if the
    /// error is tied to one.
    #[must_use]
    pub fn vertex(&self) -> Option<usize> {
        match self {
            Self::InvalidGeometry(err) => err.vertex(),
            Self::Parameter(_) => None,
        }
    }
}

/// Ill-formed contours: too few points, zero-length segments, flat bounding
/// boxes or mitres that would run off to infinity.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("a closed contour needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("zero-length segment starting at vertex {index}")]
    ZeroLengthSegment { index: usize },

    #[error("bounding box has zero {axis}")]
    ZeroExtent { axis: &'static str },

    #[error("vertex {index} folds back on itself (angle {angle:.3}°), mitre is unbounded")]
    UnboundedMitre { index: usize, angle: f64 },

    #[error("contour encloses no area, orientation is undefined")]
    DegenerateOrientation,
}

impl GeometryError {
    /// Returns the offending vertex index, if any.
    #[must_use]
    pub fn vertex(&self) -> Option<usize> {
        match self {
            Self::NonFinite { index }
            | Self::ZeroLengthSegment { index }
            | Self::UnboundedMitre { index, .. } => Some(*index),
            Self::TooFewPoints { .. } | Self::ZeroExtent { .. } | Self::DegenerateOrientation => {
                None
            }
        }
    }
}

/// Out-of-range scalar parameters (scale, thickness, kerf, mitre limit).
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("{parameter} must be positive and finite, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must be non-negative and finite, got {value}")]
    Negative { parameter: &'static str, value: f64 },

    #[error("{parameter} must be at least {min}, got {value}")]
    BelowMinimum {
        parameter: &'static str,
        value: f64,
        min: f64,
    },
}

impl ParameterError {
    pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::NonPositive { parameter, value }.into())
        }
    }

    pub(crate) fn require_non_negative(parameter: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::Negative { parameter, value }.into())
        }
    }

    pub(crate) fn require_at_least(parameter: &'static str, value: f64, min: f64) -> Result<f64> {
        if value.is_finite() && value >= min {
            Ok(value)
        } else {
            Err(Self::BelowMinimum {
                parameter,
                value,
                min,
            }
            .into())
        }
    }
}

/// Convenience type alias for results using [`MitrecutError`].
pub type Result<T> = std::result::Result<T, MitrecutError>;
