use crate::math::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Bounds {
    /// Computes the bounding box of a point set, or `None` if it is empty.
    #[must_use]
    pub fn of(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            min: *first,
            max: *first,
        };
        for pt in rest {
            bounds.min.x = bounds.min.x.min(pt.x);
            bounds.min.y = bounds.min.y.min(pt.y);
            bounds.max.x = bounds.max.x.max(pt.x);
            bounds.max.y = bounds.max.y.max(pt.y);
        }
        Some(bounds)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns `(width, height)`.
    #[must_use]
    pub fn extent(&self) -> Vector2 {
        self.max - self.min
    }

    /// The larger of width and height.
    #[must_use]
    pub fn major_dimension(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Width over height, `None` for a flat box.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        let h = self.height();
        (h > 0.0).then(|| self.width() / h)
    }
}
