pub mod animation;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeoarcError, Result};
pub use geometry::GeoPoint;
pub use operations::curve::{generate_curve, CurveParameters, GenerateCurve};
