//! Input data model: one quality-inspection record.

use serde::{Deserialize, Serialize};

/// A single inspection measurement.
///
/// Its position in the input slice is semantically meaningful: the
/// one-based ordinal is the X axis of the control charts, so callers must
/// supply measurements in observation order.
///
/// The specification limits are assumed constant across one analysis run;
/// the acquisition layer groups measurements by characteristic before
/// invoking the engine, so only the first record's limits are consulted.
///
/// # Examples
///
/// ```
/// use spc_analytics::Measurement;
///
/// let m = Measurement::new(10.2, 5.0, 15.0);
/// assert!(m.actual > m.lower_spec && m.actual < m.upper_spec);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// The measured value.
    pub actual: f64,
    /// Lower specification limit (LSL) for the measured characteristic.
    pub lower_spec: f64,
    /// Upper specification limit (USL) for the measured characteristic.
    pub upper_spec: f64,
}

impl Measurement {
    /// Creates a measurement record.
    pub fn new(actual: f64, lower_spec: f64, upper_spec: f64) -> Self {
        Self {
            actual,
            lower_spec,
            upper_spec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let m = Measurement::new(10.0, 5.0, 15.0);
        assert!((m.actual - 10.0).abs() < f64::EPSILON);
        assert!((m.lower_spec - 5.0).abs() < f64::EPSILON);
        assert!((m.upper_spec - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_round_trip() {
        let m = Measurement::new(10.25, 5.0, 15.0);
        let json = serde_json::to_string(&m).unwrap();
        let back: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
