use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A quadratic Bézier curve in 3D space.
///
/// The parametric form is:
/// `B(t) = (1-t)^2 * p0 + 2t(1-t) * control + t^2 * p2`, `t` in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct QuadraticBezier {
    p0: Point3,
    control: Point3,
    p2: Point3,
}

impl QuadraticBezier {
    /// Creates a new quadratic Bézier curve from its start, control and end points.
    #[must_use]
    pub fn new(p0: Point3, control: Point3, p2: Point3) -> Self {
        Self { p0, control, p2 }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.p0
    }

    /// Returns the control point.
    #[must_use]
    pub fn control(&self) -> &Point3 {
        &self.control
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.p2
    }

    /// Bernstein-form evaluation without a domain check.
    fn point_at(&self, t: f64) -> Point3 {
        let mt = 1.0 - t;
        let a = mt * mt;
        let b = 2.0 * t * mt;
        let c = t * t;
        Point3::from(self.p0.coords * a + self.control.coords * b + self.p2.coords * c)
    }

    /// Samples the curve at `segments + 1` evenly spaced parameters
    /// `t = i / segments`, both ends included.
    ///
    /// Each parameter is computed from its index, so the sample count
    /// does not depend on floating-point accumulation.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero.
    pub fn sample(&self, segments: u32) -> Result<Vec<Point3>> {
        if segments == 0 {
            return Err(GeometryError::Degenerate(
                "bezier sampling needs at least one segment".into(),
            )
            .into());
        }
        Ok((0..=segments)
            .map(|i| self.point_at(f64::from(i) / f64::from(segments)))
            .collect())
    }

    fn check_domain(&self, t: f64) -> Result<()> {
        let domain = self.domain();
        if domain.contains(t) {
            Ok(())
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into())
        }
    }
}

impl Curve for QuadraticBezier {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        self.check_domain(t)?;
        Ok(self.point_at(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        self.check_domain(t)?;
        // B'(t) = 2(1-t)(control - p0) + 2t(p2 - control)
        let d = (self.control - self.p0) * (2.0 * (1.0 - t)) + (self.p2 - self.control) * (2.0 * t);
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(d / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> QuadraticBezier {
        QuadraticBezier::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        )
    }

    #[test]
    fn evaluate_hits_endpoints() {
        let b = arch();
        assert!((b.evaluate(0.0).unwrap() - b.start()).norm() < TOLERANCE);
        assert!((b.evaluate(1.0).unwrap() - b.end()).norm() < TOLERANCE);
    }

    #[test]
    fn evaluate_midpoint_is_halfway_to_control() {
        // B(0.5) = 0.25 * p0 + 0.5 * control + 0.25 * p2
        let p = arch().evaluate(0.5).unwrap();
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn evaluate_out_of_range_fails() {
        assert!(arch().evaluate(1.5).is_err());
        assert!(arch().evaluate(-0.1).is_err());
    }

    #[test]
    fn tangent_at_ends_points_toward_control() {
        let b = arch();
        let t0 = b.tangent(0.0).unwrap();
        let expected = Vector3::new(1.0, 2.0, 0.0).normalize();
        assert!((t0 - expected).norm() < 1e-12);

        let t1 = b.tangent(1.0).unwrap();
        let expected = Vector3::new(1.0, -2.0, 0.0).normalize();
        assert!((t1 - expected).norm() < 1e-12);
    }

    #[test]
    fn tangent_of_collapsed_curve_is_zero_vector() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let b = QuadraticBezier::new(p, p, p);
        assert!(b.tangent(0.3).is_err());
    }

    #[test]
    fn sample_count_is_segments_plus_one() {
        let pts = arch().sample(10).unwrap();
        assert_eq!(pts.len(), 11);
        assert!((pts[0] - arch().start()).norm() < TOLERANCE);
        assert!((pts[10] - arch().end()).norm() < TOLERANCE);
        assert!((pts[5] - arch().evaluate(0.5).unwrap()).norm() < TOLERANCE);
    }

    #[test]
    fn sample_zero_segments_fails() {
        assert!(arch().sample(0).is_err());
    }

    #[test]
    fn is_never_closed() {
        assert!(!arch().is_closed());
        assert_eq!(arch().domain(), CurveDomain::new(0.0, 1.0));
    }
}
