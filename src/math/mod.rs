pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Smallest `|sin(θ/2)|` accepted for a mitre join. Below it the mitre point
/// lies more than a million thicknesses away from the vertex.
pub const MITRE_TOLERANCE: f64 = 1e-6;
