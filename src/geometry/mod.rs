pub mod bounds;
pub mod contour;

pub use bounds::Bounds;
pub use contour::{Contour, Orientation};
