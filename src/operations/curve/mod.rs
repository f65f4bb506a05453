mod generate_curve;

pub use generate_curve::{generate_curve, order_by_longitude, GenerateCurve};

use crate::geometry::GeoPoint;
use crate::math::VERTICAL_EPSILON;

/// Default number of parametric segments; the curve is sampled at `t = i / 10`.
pub const DEFAULT_SEGMENTS: u32 = 10;

/// Number of Bézier samples taken with [`DEFAULT_SEGMENTS`].
pub const DEFAULT_SAMPLE_COUNT: usize = DEFAULT_SEGMENTS as usize + 1;

/// Shaping inputs for the displaced midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    /// How far (degrees) the midpoint is pushed off the straight path.
    pub arc_height: f64,
    /// Secondary offset (degrees), only applied when `lift_up` is false.
    pub skew: f64,
    /// Selects the displacement direction.
    pub lift_up: bool,
}

impl CurveParameters {
    /// Creates a new set of curve parameters.
    #[must_use]
    pub fn new(arc_height: f64, skew: f64, lift_up: bool) -> Self {
        Self {
            arc_height,
            skew,
            lift_up,
        }
    }

    /// Pushes `midpoint` off the segment, perpendicular to its dominant direction.
    ///
    /// | orientation | `lift_up` | effect |
    /// |---|---|---|
    /// | vertical | yes | `lon -= arc_height` |
    /// | vertical | no | `lon += arc_height`, `lat += skew` |
    /// | horizontal | yes | `lat += arc_height` |
    /// | horizontal | no | `lat -= arc_height`, `lon += skew` |
    #[must_use]
    pub fn displace(&self, midpoint: GeoPoint, orientation: SegmentOrientation) -> GeoPoint {
        let GeoPoint {
            mut latitude,
            mut longitude,
        } = midpoint;
        match (orientation, self.lift_up) {
            (SegmentOrientation::Vertical, true) => longitude -= self.arc_height,
            (SegmentOrientation::Vertical, false) => {
                longitude += self.arc_height;
                latitude += self.skew;
            }
            (SegmentOrientation::Horizontal, true) => latitude += self.arc_height,
            (SegmentOrientation::Horizontal, false) => {
                latitude -= self.arc_height;
                longitude += self.skew;
            }
        }
        GeoPoint::new(latitude, longitude)
    }
}

/// Dominant direction of a segment between two geographic points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOrientation {
    /// Both ends share a meridian (within [`VERTICAL_EPSILON`]).
    Vertical,
    /// Everything else.
    Horizontal,
}

impl SegmentOrientation {
    /// Classifies the segment `a`-`b` by its longitude difference.
    #[must_use]
    pub fn classify(a: &GeoPoint, b: &GeoPoint) -> Self {
        if (a.longitude - b.longitude).abs() < VERTICAL_EPSILON {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}
