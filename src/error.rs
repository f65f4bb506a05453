use thiserror::Error;

/// Top-level error type for the geoarc crate.
#[derive(Debug, Error)]
pub enum GeoarcError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} = {value} is not finite")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`GeoarcError`].
pub type Result<T> = std::result::Result<T, GeoarcError>;

/// Fails with [`GeometryError::NonFinite`] unless `value` is finite.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { parameter, value }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_message_names_parameter() {
        let err = ensure_finite("arc_height", f64::NAN).unwrap_err();
        assert_eq!(err.to_string(), "parameter arc_height = NaN is not finite");
    }

    #[test]
    fn finite_value_passes_through() {
        assert!((ensure_finite("skew", 2.5).unwrap() - 2.5).abs() < f64::EPSILON);
    }
}
