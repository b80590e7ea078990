mod analyze;
mod interior;
mod normalize;
mod profile;

pub use analyze::{AnalyzeContour, ContourAnalysis, SegmentAngle, VertexKind};
pub use interior::{InteriorContour, InteriorOffset, MitreJoin, OffsetEdge};
pub use normalize::{Normalize, NormalizeConfig, ScaleSpec};
pub use profile::{ProfileConfig, ProfileCut, ProfileReport, SegmentRecord};
