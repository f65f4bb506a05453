use crate::math::CartesianPoint;

/// A geographic coordinate in degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`;
/// neither is validated or normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new geographic point.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Lifts the point onto the unit sphere.
    ///
    /// `x = cos(lat) * cos(lon)`, `y = cos(lat) * sin(lon)`, `z = sin(lat)`.
    #[must_use]
    pub fn to_cartesian(&self) -> CartesianPoint {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        let cl = lat.cos();
        CartesianPoint::new(cl * lon.cos(), cl * lon.sin(), lat.sin())
    }

    /// Lowers a Cartesian point back to geographic coordinates.
    ///
    /// The point need not lie on the unit sphere; only its direction matters.
    /// At the poles the longitude is whatever `atan2(0, 0)` yields.
    #[must_use]
    pub fn from_cartesian(c: &CartesianPoint) -> Self {
        let hyp = c.x.hypot(c.y);
        Self {
            latitude: c.z.atan2(hyp).to_degrees(),
            longitude: c.y.atan2(c.x).to_degrees(),
        }
    }

    /// Returns the component-wise mean of two points.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }

    /// Returns whether both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<GeoPoint> for CartesianPoint {
    fn from(p: GeoPoint) -> Self {
        p.to_cartesian()
    }
}

impl From<&CartesianPoint> for GeoPoint {
    fn from(c: &CartesianPoint) -> Self {
        Self::from_cartesian(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn origin_lifts_to_x_axis() {
        let c = GeoPoint::new(0.0, 0.0).to_cartesian();
        assert_abs_diff_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn east_ninety_lifts_to_y_axis() {
        let c = GeoPoint::new(0.0, 90.0).to_cartesian();
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn north_pole_lifts_to_z_axis() {
        let c = GeoPoint::new(90.0, 0.0).to_cartesian();
        assert_abs_diff_eq!(c.z, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.x.hypot(c.y), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn lifted_point_is_on_unit_sphere() {
        let c = GeoPoint::new(-33.9, 151.2).to_cartesian();
        assert_abs_diff_eq!(c.coords.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn lowering_ignores_radius() {
        let c = GeoPoint::new(45.0, -120.0).to_cartesian();
        let scaled = CartesianPoint::from(c.coords * 0.25);
        let p = GeoPoint::from_cartesian(&scaled);
        assert_abs_diff_eq!(p.latitude, 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.longitude, -120.0, epsilon = 1e-9);
    }

    #[test]
    fn from_impls_match_methods() {
        let p = GeoPoint::new(12.5, 77.0);
        let c = CartesianPoint::from(p);
        assert_eq!(c, p.to_cartesian());
        assert_eq!(GeoPoint::from(&c), GeoPoint::from_cartesian(&c));
    }

    #[test]
    fn midpoint_averages_components() {
        let m = GeoPoint::new(10.0, 0.0).midpoint(&GeoPoint::new(20.0, 80.0));
        assert_eq!(m, GeoPoint::new(15.0, 40.0));
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_finite());
        assert!(GeoPoint::new(1.0, 2.0).is_finite());
    }

    proptest! {
        #[test]
        fn round_trip_recovers_point(lat in -89.9_f64..89.9, lon in -179.9_f64..179.9) {
            let p = GeoPoint::new(lat, lon);
            let back = GeoPoint::from_cartesian(&p.to_cartesian());
            prop_assert!((back.latitude - lat).abs() < 1e-9);
            prop_assert!((back.longitude - lon).abs() < 1e-9);
        }
    }
}
