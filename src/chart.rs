//! Individuals and Moving Range (I-MR) control chart builder.
//!
//! Builds the X (individual value) and moving-range series for a sequence
//! of single observations, together with their center lines and Shewhart
//! control limits. Subgroup size is 1 by design, so the chart factors are
//! the fixed n=2 moving-range constants rather than a configurable table.
//!
//! # Algorithm
//!
//! 1. X series: the raw observations, plotted at their one-based ordinal.
//! 2. Moving ranges: MR_i = |x_i − x_{i−1}| for i >= 1 (n−1 points).
//! 3. X chart limits: CL = X-bar, UCL/LCL = X-bar ± E2 · MR-bar.
//! 4. MR chart limits: CL = MR-bar, UCL = D4 · MR-bar, LCL = 0.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*,
//!   8th ed., Chapter 6: Control Charts for Variables.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::stats;

/// E2 factor for the individuals chart UCL/LCL.
///
/// UCL = X-bar + E2 * MR-bar, LCL = X-bar - E2 * MR-bar.
/// E2 = 3 / d2(n=2) = 3 / 1.128 = 2.6596...
const E2: f64 = 2.66;

/// D4 factor for the MR chart upper limit (n=2 moving range).
const D4_MR: f64 = 3.267;

/// Control limits for one chart: upper control limit, center line, lower
/// control limit, all computed from the process data itself (statistical
/// thresholds, not specification limits).
///
/// # Invariants
///
/// - `lcl <= cl <= ucl`
/// - All values are finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    /// Upper control limit.
    pub ucl: f64,
    /// Center line.
    pub cl: f64,
    /// Lower control limit.
    pub lcl: f64,
}

/// A single plotted point: one-based ordinal and the statistic value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// One-based position on the chart X axis (observation order).
    pub index: usize,
    /// The plotted value (individual observation or moving range).
    pub value: f64,
}

/// The complete I-MR chart data for one analysis run.
///
/// Both series are in observation order. The moving-range series has one
/// fewer point than the X series (the first observation has no predecessor)
/// and starts at ordinal 1 so the two series share an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlChartSummary {
    /// Individual observations, one point per measurement.
    pub x_series: Vec<ChartPoint>,
    /// Absolute successive differences, n−1 points.
    pub range_series: Vec<ChartPoint>,
    /// Limits for the individuals chart.
    pub x_limits: ControlLimits,
    /// Limits for the moving-range chart (LCL is always 0).
    pub range_limits: ControlLimits,
}

/// Builds the I-MR chart for a value sequence.
///
/// Self-contained on the raw values: the center lines and limits are
/// derived from the observations and their moving ranges, independent of
/// any externally computed statistics.
///
/// # Errors
///
/// [`AnalysisError::InsufficientData`] if fewer than 2 values are supplied
/// (no moving range exists for a single observation).
///
/// # Examples
///
/// ```
/// use spc_analytics::chart::build_chart;
///
/// let chart = build_chart(&[10.0, 12.0, 11.0, 13.0, 9.0]).unwrap();
/// assert_eq!(chart.x_series.len(), 5);
/// assert_eq!(chart.range_series.len(), 4);
/// assert!((chart.range_limits.cl - 2.25).abs() < 1e-12);
/// ```
pub fn build_chart(values: &[f64]) -> Result<ControlChartSummary, AnalysisError> {
    if values.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            required: 2,
            actual: values.len(),
        });
    }

    let x_series: Vec<ChartPoint> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| ChartPoint {
            index: i + 1,
            value: v,
        })
        .collect();

    // Moving ranges start at ordinal 1: MR_i pairs observation i with i+1.
    let range_series: Vec<ChartPoint> = values
        .windows(2)
        .enumerate()
        .map(|(i, w)| ChartPoint {
            index: i + 1,
            value: (w[1] - w[0]).abs(),
        })
        .collect();

    let x_bar = stats::mean(values).ok_or(AnalysisError::InsufficientData {
        required: 2,
        actual: values.len(),
    })?;
    let range_values: Vec<f64> = range_series.iter().map(|p| p.value).collect();
    let range_mean = stats::mean(&range_values).ok_or(AnalysisError::InsufficientData {
        required: 2,
        actual: values.len(),
    })?;

    let x_limits = ControlLimits {
        ucl: x_bar + E2 * range_mean,
        cl: x_bar,
        lcl: x_bar - E2 * range_mean,
    };

    // Ranges are non-negative by construction, so the MR chart LCL is
    // clamped at zero.
    let range_limits = ControlLimits {
        ucl: D4_MR * range_mean,
        cl: range_mean,
        lcl: 0.0,
    };

    Ok(ControlChartSummary {
        x_series,
        range_series,
        x_limits,
        range_limits,
    })
}
