//! Errors raised while building or writing a solid

/// All the ways turning a module matrix into a mesh document can fail.
///
/// Every variant is fatal for the current run: there is no retry and no
/// guarantee about what was already written to the sink.
#[derive(Debug, thiserror::Error)]
pub enum QrSolidError {
    /// (InvalidInput) The module matrix is empty, not square, or unreadable
    #[error("(InvalidInput) {0}")]
    InvalidInput(String),
    /// (InvalidParameter) A primitive or configuration value is out of range
    #[error("(InvalidParameter) {0}")]
    InvalidParameter(String),
    /// (IOFailure) The sink could not be opened or written
    #[error("(IOFailure) {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, QrSolidError>;

/// Check that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: crate::float_types::Real) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(QrSolidError::InvalidParameter(format!(
            "{name} must be a finite positive number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass() {
        assert!(ensure_positive("length", 1.0).is_ok());
        assert!(ensure_positive("length", 1e-9).is_ok());
    }

    #[test]
    fn zero_negative_and_nan_are_rejected() {
        for bad in [0.0, -1.0, crate::float_types::Real::NAN, crate::float_types::Real::INFINITY] {
            let err = ensure_positive("radius", bad).unwrap_err();
            assert!(matches!(err, QrSolidError::InvalidParameter(_)));
            assert!(err.to_string().contains("radius"));
        }
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: QrSolidError = io.into();
        assert!(err.to_string().starts_with("(IOFailure)"));
    }
}
