//! Curve path demo: draws the arc from `(10, 0)` to `(10, 80)` and steps a
//! marker along it on the console.
//!
//! Usage:
//! ```text
//! cargo run --example curve_path
//! RUST_LOG=geoarc=debug cargo run --example curve_path
//! ```

use std::time::Duration;

use geoarc::animation::{MarkerPath, DEFAULT_TRANSITION};
use geoarc::{CurveParameters, GenerateCurve, GeoPoint};
use tracing::{info, warn};

/// Simulated frame interval.
const FRAME: Duration = Duration::from_millis(1250);

fn main() {
    // Default: WARN for everything, INFO for geoarc and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geoarc=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curve_path=info".parse().unwrap_or_default())
        .add_directive("geoarc=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let start = GeoPoint::new(10.0, 0.0);
    let end = GeoPoint::new(10.0, 80.0);
    let op = GenerateCurve::new(start, end, CurveParameters::new(20.0, 0.0, true));

    // Fall back to a straight line when the curve cannot be built.
    let line = op.execute().unwrap_or_else(|err| {
        warn!(%err, "curve unavailable, drawing straight line");
        vec![start, end]
    });

    for (i, p) in line.iter().enumerate() {
        info!(i, lat = p.latitude, lon = p.longitude, "polyline vertex");
    }

    let mut marker = MarkerPath::linear(start, line, DEFAULT_TRANSITION);
    info!(total = ?marker.total_duration(), "animating marker");
    while !marker.is_finished() {
        let p = marker.advance(FRAME);
        info!(
            target_index = marker.current_index(),
            lat = p.latitude,
            lon = p.longitude,
            "marker"
        );
    }
}
