//! Error taxonomy for the analysis pipeline.
//!
//! Every failure is reported synchronously to the caller; the engine never
//! retries (the computation is deterministic, so retrying the same input
//! reproduces the same error) and never returns partial results.

use thiserror::Error;

/// Errors raised by [`analyze`](crate::analyze) and the individual stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Too few measurements for the requested computation.
    ///
    /// Descriptive statistics and the moving-range chart need at least 2
    /// points; histogram binning needs at least 1. The caller must supply
    /// more data — there is nothing to retry.
    #[error("insufficient data: need at least {required} measurements, got {actual}")]
    InsufficientData {
        /// Minimum number of measurements the computation requires.
        required: usize,
        /// Number of measurements actually supplied.
        actual: usize,
    },

    /// Overall standard deviation is exactly zero (all measurements
    /// identical), so capability ratios are undefined.
    ///
    /// The caller decides whether to display "undefined" or block the report.
    #[error("zero dispersion: all measurements are identical, capability indices are undefined")]
    ZeroDispersion,

    /// The specification band is empty or inverted (`usl <= lsl`).
    ///
    /// Capability math assumes a positive tolerance band.
    #[error("invalid specification: USL ({usl}) must be greater than LSL ({lsl})")]
    InvalidSpecification {
        /// Lower specification limit as supplied.
        lsl: f64,
        /// Upper specification limit as supplied.
        usl: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = AnalysisError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: need at least 2 measurements, got 1"
        );
    }

    #[test]
    fn test_invalid_specification_message() {
        let err = AnalysisError::InvalidSpecification {
            lsl: 10.0,
            usl: 5.0,
        };
        assert!(err.to_string().contains("USL (5)"));
        assert!(err.to_string().contains("LSL (10)"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(AnalysisError::ZeroDispersion, AnalysisError::ZeroDispersion);
        assert_ne!(
            AnalysisError::ZeroDispersion,
            AnalysisError::InsufficientData {
                required: 2,
                actual: 0
            }
        );
    }
}
