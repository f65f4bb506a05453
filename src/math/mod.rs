/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// A point on (or near) the unit sphere, lifted from a geographic coordinate.
pub type CartesianPoint = Point3;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Longitude difference (degrees) below which a segment counts as vertical.
pub const VERTICAL_EPSILON: f64 = 1e-4;
