use crate::geometry::GeoPoint;

/// Strategy for positioning a marker between two path points.
pub trait Interpolator {
    /// Returns the position at `fraction` (in `[0, 1]`) of the way from `from` to `to`.
    fn interpolate(&self, fraction: f64, from: GeoPoint, to: GeoPoint) -> GeoPoint;
}

/// Interpolates latitude and longitude independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Interpolator for Linear {
    fn interpolate(&self, fraction: f64, from: GeoPoint, to: GeoPoint) -> GeoPoint {
        GeoPoint::new(
            from.latitude + (to.latitude - from.latitude) * fraction,
            from.longitude + (to.longitude - from.longitude) * fraction,
        )
    }
}

impl<F> Interpolator for F
where
    F: Fn(f64, GeoPoint, GeoPoint) -> GeoPoint,
{
    fn interpolate(&self, fraction: f64, from: GeoPoint, to: GeoPoint) -> GeoPoint {
        self(fraction, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        let a = GeoPoint::new(10.0, 0.0);
        let b = GeoPoint::new(20.0, 80.0);
        assert_eq!(Linear.interpolate(0.0, a, b), a);
        assert_eq!(Linear.interpolate(1.0, a, b), b);
    }

    #[test]
    fn linear_quarter() {
        let p = Linear.interpolate(0.25, GeoPoint::new(0.0, -40.0), GeoPoint::new(8.0, 40.0));
        assert_eq!(p, GeoPoint::new(2.0, -20.0));
    }

    #[test]
    fn closure_is_a_strategy() {
        let snap = |fraction: f64, from: GeoPoint, to: GeoPoint| {
            if fraction < 0.5 {
                from
            } else {
                to
            }
        };
        let a = GeoPoint::new(1.0, 1.0);
        let b = GeoPoint::new(2.0, 2.0);
        assert_eq!(snap.interpolate(0.4, a, b), a);
        assert_eq!(snap.interpolate(0.6, a, b), b);
    }
}
