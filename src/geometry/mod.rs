pub mod curve;
pub mod geo_point;

pub use curve::{Curve, CurveDomain, QuadraticBezier};
pub use geo_point::GeoPoint;
