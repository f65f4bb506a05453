use tracing::{debug, error};

use crate::error::{ensure_finite, GeometryError, Result};
use crate::geometry::{GeoPoint, QuadraticBezier};

use super::{CurveParameters, SegmentOrientation, DEFAULT_SEGMENTS};

/// Returns the two points ordered by ascending longitude.
///
/// Equal longitudes keep the caller's order.
#[must_use]
pub fn order_by_longitude(p1: GeoPoint, p2: GeoPoint) -> (GeoPoint, GeoPoint) {
    if p1.longitude > p2.longitude {
        (p2, p1)
    } else {
        (p1, p2)
    }
}

/// Builds a curved path between two geographic points.
///
/// The straight-line midpoint is displaced according to [`CurveParameters`],
/// the endpoints and displaced midpoint are lifted onto the unit sphere, and
/// the quadratic Bézier through them is sampled and lowered back. The result
/// is `[first, samples.., second]` where `first`/`second` are the endpoints
/// ordered by longitude.
#[derive(Debug, Clone)]
pub struct GenerateCurve {
    start: GeoPoint,
    end: GeoPoint,
    params: CurveParameters,
    segments: u32,
}

impl GenerateCurve {
    /// Creates a new `GenerateCurve` operation with [`DEFAULT_SEGMENTS`].
    #[must_use]
    pub fn new(start: GeoPoint, end: GeoPoint, params: CurveParameters) -> Self {
        Self {
            start,
            end,
            params,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the number of parametric segments; `segments + 1` samples are taken.
    #[must_use]
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Returns the length of a successful result.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.segments as usize + 3
    }

    /// Executes the operation, returning the full ordered path.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if any input is NaN or infinite,
    /// and [`GeometryError::Degenerate`] if the segment count is zero or a
    /// sample cannot be lowered to a finite coordinate.
    pub fn execute(&self) -> Result<Vec<GeoPoint>> {
        let mut points = Vec::with_capacity(self.path_len());
        self.assemble(&mut points)?;
        Ok(points)
    }

    /// Executes the operation without failing.
    ///
    /// On error the failure is logged and the points assembled so far are
    /// returned, which may be an empty or partial path.
    #[must_use]
    pub fn execute_lenient(&self) -> Vec<GeoPoint> {
        let mut points = Vec::with_capacity(self.path_len());
        if let Err(err) = self.assemble(&mut points) {
            error!(%err, assembled = points.len(), "curve generation failed");
        }
        points
    }

    fn validate(&self) -> Result<()> {
        ensure_finite("start.latitude", self.start.latitude)?;
        ensure_finite("start.longitude", self.start.longitude)?;
        ensure_finite("end.latitude", self.end.latitude)?;
        ensure_finite("end.longitude", self.end.longitude)?;
        ensure_finite("arc_height", self.params.arc_height)?;
        ensure_finite("skew", self.params.skew)?;
        Ok(())
    }

    fn assemble(&self, out: &mut Vec<GeoPoint>) -> Result<()> {
        self.validate()?;

        let (first, second) = order_by_longitude(self.start, self.end);
        let orientation = SegmentOrientation::classify(&first, &second);
        let control = self.params.displace(first.midpoint(&second), orientation);
        if !control.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "displaced midpoint ({}, {}) is not finite",
                control.latitude, control.longitude
            ))
            .into());
        }

        debug!(
            ?first,
            ?second,
            ?control,
            ?orientation,
            segments = self.segments,
            "generating curve"
        );

        out.push(first);

        let bezier = QuadraticBezier::new(
            first.to_cartesian(),
            control.to_cartesian(),
            second.to_cartesian(),
        );
        for (i, sample) in bezier.sample(self.segments)?.iter().enumerate() {
            let p = GeoPoint::from_cartesian(sample);
            if !p.is_finite() {
                return Err(
                    GeometryError::Degenerate(format!("curve sample {i} is not finite")).into(),
                );
            }
            out.push(p);
        }

        out.push(second);
        Ok(())
    }
}

/// Generates a curved path from `start` to `end` with the default sampling.
///
/// # Errors
///
/// See [`GenerateCurve::execute`].
pub fn generate_curve(
    start: GeoPoint,
    end: GeoPoint,
    arc_height: f64,
    skew: f64,
    up: bool,
) -> Result<Vec<GeoPoint>> {
    GenerateCurve::new(start, end, CurveParameters::new(arc_height, skew, up)).execute()
}
