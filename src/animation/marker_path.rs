use std::time::Duration;

use tracing::trace;

use crate::geometry::GeoPoint;

use super::{Interpolator, Linear};

/// Steps a marker through a sequence of points, one timed transition at a time.
///
/// Transition `i` moves the marker from wherever it stood when transition
/// `i - 1` finished to `points[i]`. The next transition starts only once the
/// current one has completed; time left over from a completed transition
/// carries into the next.
#[derive(Debug, Clone)]
pub struct MarkerPath<I = Linear> {
    points: Vec<GeoPoint>,
    transition: Duration,
    interpolator: I,
    index: usize,
    from: GeoPoint,
    position: GeoPoint,
    elapsed: Duration,
}

impl MarkerPath<Linear> {
    /// Creates a path driven by [`Linear`] interpolation.
    #[must_use]
    pub fn linear(origin: GeoPoint, points: Vec<GeoPoint>, transition: Duration) -> Self {
        Self::new(origin, points, transition, Linear)
    }
}

impl<I: Interpolator> MarkerPath<I> {
    /// Creates a new marker path with the marker standing at `origin`.
    #[must_use]
    pub fn new(
        origin: GeoPoint,
        points: Vec<GeoPoint>,
        transition: Duration,
        interpolator: I,
    ) -> Self {
        Self {
            points,
            transition,
            interpolator,
            index: 0,
            from: origin,
            position: origin,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances the animation by `dt` and returns the marker position.
    pub fn advance(&mut self, dt: Duration) -> GeoPoint {
        if self.is_finished() {
            return self.position;
        }
        self.elapsed += dt;

        while let Some(&target) = self.points.get(self.index) {
            if self.elapsed < self.transition {
                let fraction = self.elapsed.as_secs_f64() / self.transition.as_secs_f64();
                self.position = self.interpolator.interpolate(fraction, self.from, target);
                return self.position;
            }
            self.elapsed -= self.transition;
            self.position = target;
            self.from = target;
            trace!(index = self.index, ?target, "transition complete");
            self.index += 1;
        }

        self.elapsed = Duration::ZERO;
        self.position
    }

    /// Returns the current marker position.
    #[must_use]
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Returns the index of the point currently being approached.
    ///
    /// Equals `points.len()` once the path is finished.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Returns whether every point has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.points.len()
    }

    /// Returns the time needed to run the whole path.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        let count = u32::try_from(self.points.len()).unwrap_or(u32::MAX);
        self.transition.saturating_mul(count)
    }

    /// Returns the path points.
    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}
