mod interpolator;
mod marker_path;

pub use interpolator::{Interpolator, Linear};
pub use marker_path::MarkerPath;

use std::time::Duration;

/// Time spent moving the marker to each path point.
pub const DEFAULT_TRANSITION: Duration = Duration::from_secs(5);
