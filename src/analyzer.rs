//! Analysis orchestration: the single entry point of the engine.
//!
//! Runs the four stages in order — descriptive statistics, control chart,
//! capability indices, histogram — over one immutable measurement
//! sequence, then applies presentation rounding at the result boundary.
//!
//! The pipeline is all-or-nothing: any stage failure aborts the whole
//! analysis and no partial result escapes.

use serde::{Deserialize, Serialize};

use crate::capability::{compute_capability, Capability};
use crate::chart::{build_chart, ControlChartSummary, ControlLimits};
use crate::distribution::{bin_values, Distribution};
use crate::error::AnalysisError;
use crate::measurement::Measurement;
use crate::stats;

/// Mean and sample standard deviation of the measured values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Descriptive {
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n−1 denominator).
    pub std_dev: f64,
}

/// The complete analysis output, constructed once per call and never
/// mutated afterwards. Consumers (chart renderers, report generators)
/// treat it as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall mean and standard deviation.
    pub descriptive: Descriptive,
    /// I-MR chart series and limits.
    pub control_chart: ControlChartSummary,
    /// Capability/performance indices (rounded to 2 decimals).
    pub capability: Capability,
    /// Histogram of the values.
    pub distribution: Distribution,
}

/// Computes descriptive statistics for a value sequence.
///
/// # Errors
///
/// [`AnalysisError::InsufficientData`] if fewer than 2 values are supplied
/// (the sample standard deviation is undefined otherwise).
pub fn describe(values: &[f64]) -> Result<Descriptive, AnalysisError> {
    let insufficient = AnalysisError::InsufficientData {
        required: 2,
        actual: values.len(),
    };
    let mean = stats::mean(values).ok_or(insufficient.clone())?;
    let std_dev = stats::std_dev(values).ok_or(insufficient)?;
    Ok(Descriptive { mean, std_dev })
}

/// Runs the full SPC analysis over an ordered measurement sequence.
///
/// The specification limits are taken from the first measurement; the
/// acquisition layer guarantees they are constant across one run. All
/// intermediate arithmetic uses full precision — only the capability
/// indices and the chart limits are rounded (to 2 decimals) on the way
/// out, so dependent quantities never compound rounding error.
///
/// # Errors
///
/// - [`AnalysisError::InsufficientData`] — fewer than 2 measurements.
/// - [`AnalysisError::InvalidSpecification`] — `upper_spec <= lower_spec`.
/// - [`AnalysisError::ZeroDispersion`] — all measurements identical.
///
/// # Examples
///
/// ```
/// use spc_analytics::{analyze, Measurement};
///
/// let measurements: Vec<Measurement> = [10.0, 12.0, 11.0, 13.0, 9.0]
///     .iter()
///     .map(|&v| Measurement::new(v, 5.0, 15.0))
///     .collect();
///
/// let result = analyze(&measurements).unwrap();
/// assert!((result.descriptive.mean - 11.0).abs() < 1e-12);
/// assert!((result.control_chart.x_limits.ucl - 16.99).abs() < 1e-12);
/// assert!((result.capability.cpk - 0.84).abs() < 1e-12);
/// ```
pub fn analyze(measurements: &[Measurement]) -> Result<AnalysisResult, AnalysisError> {
    if measurements.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            required: 2,
            actual: measurements.len(),
        });
    }

    // Shared limits are an upstream contract; only the first record's
    // band is inspected.
    let lsl = measurements[0].lower_spec;
    let usl = measurements[0].upper_spec;
    if usl <= lsl {
        return Err(AnalysisError::InvalidSpecification { lsl, usl });
    }

    let values: Vec<f64> = measurements.iter().map(|m| m.actual).collect();

    let descriptive = describe(&values)?;
    let mut control_chart = build_chart(&values)?;
    let mut capability = compute_capability(descriptive.mean, descriptive.std_dev, lsl, usl)?;
    let target = (usl + lsl) / 2.0;
    let distribution = bin_values(&values, descriptive.mean, descriptive.std_dev, target)?;

    round_limits(&mut control_chart.x_limits);
    round_limits(&mut control_chart.range_limits);
    round_capability(&mut capability);

    Ok(AnalysisResult {
        descriptive,
        control_chart,
        capability,
        distribution,
    })
}

/// Rounds to 2 decimal places, half away from zero.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round_limits(limits: &mut ControlLimits) {
    limits.ucl = round2(limits.ucl);
    limits.cl = round2(limits.cl);
    limits.lcl = round2(limits.lcl);
}

fn round_capability(cap: &mut Capability) {
    cap.cp = round2(cap.cp);
    cap.cpu = round2(cap.cpu);
    cap.cpl = round2(cap.cpl);
    cap.cpk = round2(cap.cpk);
    cap.pp = round2(cap.pp);
    cap.ppu = round2(cap.ppu);
    cap.ppl = round2(cap.ppl);
    cap.ppk = round2(cap.ppk);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurements(values: &[f64], lsl: f64, usl: f64) -> Vec<Measurement> {
        values
            .iter()
            .map(|&v| Measurement::new(v, lsl, usl))
            .collect()
    }

    #[test]
    fn test_describe_textbook() {
        let d = describe(&[10.0, 12.0, 11.0, 13.0, 9.0]).unwrap();
        assert!((d.mean - 11.0).abs() < 1e-12);
        assert!((d.std_dev - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_describe_needs_two_points() {
        assert_eq!(
            describe(&[1.0]).unwrap_err(),
            AnalysisError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_analyze_rejects_short_input() {
        let ms = measurements(&[10.0], 5.0, 15.0);
        assert_eq!(
            analyze(&ms).unwrap_err(),
            AnalysisError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
        assert!(matches!(
            analyze(&[]).unwrap_err(),
            AnalysisError::InsufficientData { actual: 0, .. }
        ));
    }

    #[test]
    fn test_analyze_rejects_inverted_specification() {
        let ms = measurements(&[10.0, 11.0], 15.0, 5.0);
        assert_eq!(
            analyze(&ms).unwrap_err(),
            AnalysisError::InvalidSpecification {
                lsl: 15.0,
                usl: 5.0
            }
        );
    }

    #[test]
    fn test_analyze_rejects_constant_data() {
        let ms = measurements(&[10.0; 6], 5.0, 15.0);
        assert_eq!(analyze(&ms).unwrap_err(), AnalysisError::ZeroDispersion);
    }

    #[test]
    fn test_full_pipeline_textbook_values() {
        let ms = measurements(&[10.0, 12.0, 11.0, 13.0, 9.0], 5.0, 15.0);
        let result = analyze(&ms).unwrap();

        // Descriptive: full precision
        assert!((result.descriptive.mean - 11.0).abs() < 1e-12);
        assert!((result.descriptive.std_dev - 2.5_f64.sqrt()).abs() < 1e-12);

        // Chart: ranges [2, 1, 2, 4], MR-bar 2.25; limits rounded
        let ranges: Vec<f64> = result
            .control_chart
            .range_series
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(ranges, vec![2.0, 1.0, 2.0, 4.0]);
        assert!((result.control_chart.x_limits.ucl - 16.99).abs() < 1e-12);
        // 5.015 is not representable; the double sits just below, so the
        // half-away-from-zero rounding lands on 5.01.
        assert!((result.control_chart.x_limits.lcl - 5.01).abs() < 1e-12);
        assert!((result.control_chart.x_limits.cl - 11.0).abs() < 1e-12);
        assert!((result.control_chart.range_limits.ucl - 7.35).abs() < 1e-12);
        assert!((result.control_chart.range_limits.cl - 2.25).abs() < 1e-12);

        // Capability: rounded at the boundary
        assert!((result.capability.cp - 1.05).abs() < 1e-12);
        assert!((result.capability.cpu - 0.84).abs() < 1e-12);
        assert!((result.capability.cpl - 1.26).abs() < 1e-12);
        assert!((result.capability.cpk - 0.84).abs() < 1e-12);
        assert_eq!(result.capability.pp, result.capability.cp);
        assert_eq!(result.capability.ppk, result.capability.cpk);

        // Distribution: 3 bins (ceil sqrt 5), counts conserve n, target is
        // the specification midpoint
        assert_eq!(result.distribution.bin_count, 3);
        let total: usize = result.distribution.bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 5);
        assert!((result.distribution.target - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let ms = measurements(&[10.0, 12.0, 11.0, 13.0, 9.0], 5.0, 15.0);
        let a = analyze(&ms).unwrap();
        let b = analyze(&ms).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_permutation_changes_series_not_aggregates() {
        let ms = measurements(&[10.0, 12.0, 11.0, 13.0, 9.0], 5.0, 15.0);
        let mut shuffled = ms.clone();
        shuffled.reverse();

        let a = analyze(&ms).unwrap();
        let b = analyze(&shuffled).unwrap();

        assert_ne!(a.control_chart.x_series, b.control_chart.x_series);
        assert_eq!(a.descriptive, b.descriptive);
        assert_eq!(a.capability, b.capability);
        assert_eq!(a.distribution.bins, b.distribution.bins);
    }

    #[test]
    fn test_series_values_are_not_rounded() {
        let ms = measurements(&[10.123456, 12.654321, 11.111111], 5.0, 15.0);
        let result = analyze(&ms).unwrap();
        assert!((result.control_chart.x_series[0].value - 10.123456).abs() < 1e-12);
    }

    #[test]
    fn test_result_serializes() {
        let ms = measurements(&[10.0, 12.0, 11.0], 5.0, 15.0);
        let result = analyze(&ms).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert!((round2(16.985) - 16.99).abs() < 1e-12);
        assert!((round2(-16.985) + 16.99).abs() < 1e-12);
        assert!((round2(1.054) - 1.05).abs() < 1e-12);
    }
}
