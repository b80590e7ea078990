//! Cut angles, segment lengths and the inner edge of a constant-thickness
//! strip bent or mitred along a closed outline.
//!
//! ```text
//! raw points ──Normalize──▶ Contour ──AnalyzeContour──▶ ContourAnalysis
//!                                                          │
//!                                   ProfileReport ◀──InteriorOffset
//! ```
//!
//! [`operations::ProfileCut`] runs the whole chain from a [`ProfileConfig`].

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, MitrecutError, ParameterError, Result};
pub use geometry::{Bounds, Contour, Orientation};
pub use math::{Point2, Vector2};
pub use operations::{ProfileConfig, ProfileCut, ProfileReport};
