//! Run rules for detecting non-random patterns on the individuals chart.
//!
//! Implements the four classic Western Electric run tests. These detect
//! special causes of variation even when every point stays inside the
//! control limits, so reporting front ends can flag suspect regions of
//! the chart.
//!
//! # References
//!
//! - Western Electric (1956). *Statistical Quality Control Handbook*.
//! - Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special
//!   Causes", *Journal of Quality Technology* 16(4), pp. 237-239.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartPoint, ControlChartSummary, ControlLimits};

/// The pattern a run rule detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A single point beyond the 3-sigma control limits (Rule 1).
    BeyondLimits,
    /// 2 of 3 consecutive points beyond 2 sigma on the same side (Rule 2).
    TwoOfThreeBeyond2Sigma,
    /// 4 of 5 consecutive points beyond 1 sigma on the same side (Rule 3).
    FourOfFiveBeyond1Sigma,
    /// 9 consecutive points on the same side of the center line (Rule 4).
    NineOneSide,
}

/// A detected violation: which point, which pattern.
///
/// `point_index` uses the same one-based ordinal as [`ChartPoint::index`];
/// for multi-point patterns it names the last point of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// One-based ordinal of the (last) point in the violating pattern.
    pub point_index: usize,
    /// The pattern detected.
    pub kind: ViolationKind,
}

/// Trait for applying a run-rule set to chart data.
pub trait RunRule {
    /// Check points against this rule set.
    ///
    /// A single point may appear multiple times if it triggers more than
    /// one rule.
    fn check(&self, points: &[ChartPoint], limits: &ControlLimits) -> Vec<Violation>;
}

/// The four Western Electric rules (1956 handbook).
pub struct WesternElectricRules;

/// Compute 1-sigma and 2-sigma zone boundaries from control limits.
///
/// Returns `(one_sigma, two_sigma)` where `one_sigma = (UCL - CL) / 3`.
fn zone_widths(limits: &ControlLimits) -> (f64, f64) {
    let sigma = (limits.ucl - limits.cl) / 3.0;
    (sigma, 2.0 * sigma)
}

/// Rule 1: point beyond the control limits.
fn check_beyond_limits(points: &[ChartPoint], limits: &ControlLimits) -> Vec<Violation> {
    points
        .iter()
        .filter(|p| p.value > limits.ucl || p.value < limits.lcl)
        .map(|p| Violation {
            point_index: p.index,
            kind: ViolationKind::BeyondLimits,
        })
        .collect()
}

/// Rule 2: 2 of 3 consecutive points beyond 2 sigma, same side.
fn check_two_of_three(points: &[ChartPoint], limits: &ControlLimits) -> Vec<Violation> {
    let mut violations = Vec::new();
    if points.len() < 3 {
        return violations;
    }
    let (_, two_sigma) = zone_widths(limits);
    let upper = limits.cl + two_sigma;
    let lower = limits.cl - two_sigma;

    for i in 2..points.len() {
        let window = &points[i - 2..=i];
        let above = window.iter().filter(|p| p.value > upper).count();
        let below = window.iter().filter(|p| p.value < lower).count();
        if above >= 2 || below >= 2 {
            violations.push(Violation {
                point_index: points[i].index,
                kind: ViolationKind::TwoOfThreeBeyond2Sigma,
            });
        }
    }
    violations
}

/// Rule 3: 4 of 5 consecutive points beyond 1 sigma, same side.
fn check_four_of_five(points: &[ChartPoint], limits: &ControlLimits) -> Vec<Violation> {
    let mut violations = Vec::new();
    if points.len() < 5 {
        return violations;
    }
    let (one_sigma, _) = zone_widths(limits);
    let upper = limits.cl + one_sigma;
    let lower = limits.cl - one_sigma;

    for i in 4..points.len() {
        let window = &points[i - 4..=i];
        let above = window.iter().filter(|p| p.value > upper).count();
        let below = window.iter().filter(|p| p.value < lower).count();
        if above >= 4 || below >= 4 {
            violations.push(Violation {
                point_index: points[i].index,
                kind: ViolationKind::FourOfFiveBeyond1Sigma,
            });
        }
    }
    violations
}

/// Rule 4: 9 consecutive points on the same side of the center line.
///
/// A point exactly on the center line breaks the run.
fn check_nine_one_side(points: &[ChartPoint], limits: &ControlLimits) -> Vec<Violation> {
    let mut violations = Vec::new();
    if points.len() < 9 {
        return violations;
    }
    let sides: Vec<i8> = points
        .iter()
        .map(|p| {
            if p.value > limits.cl {
                1
            } else if p.value < limits.cl {
                -1
            } else {
                0
            }
        })
        .collect();

    let mut run_length = 1_usize;
    for i in 1..sides.len() {
        if sides[i] != 0 && sides[i] == sides[i - 1] {
            run_length += 1;
        } else {
            run_length = 1;
        }
        if run_length >= 9 {
            violations.push(Violation {
                point_index: points[i].index,
                kind: ViolationKind::NineOneSide,
            });
        }
    }
    violations
}

impl RunRule for WesternElectricRules {
    fn check(&self, points: &[ChartPoint], limits: &ControlLimits) -> Vec<Violation> {
        let mut violations = check_beyond_limits(points, limits);
        violations.extend(check_two_of_three(points, limits));
        violations.extend(check_four_of_five(points, limits));
        violations.extend(check_nine_one_side(points, limits));
        violations
    }
}

/// Runs the Western Electric rules over the X series of a built chart.
///
/// # Examples
///
/// ```
/// use spc_analytics::chart::build_chart;
/// use spc_analytics::rules::x_chart_violations;
///
/// let mut values = vec![10.0, 10.4, 9.8, 10.2, 9.9, 10.1, 10.3, 9.7];
/// values.push(50.0); // gross outlier
/// let chart = build_chart(&values).unwrap();
/// let violations = x_chart_violations(&chart);
/// assert!(violations.iter().any(|v| v.point_index == 9));
/// ```
pub fn x_chart_violations(chart: &ControlChartSummary) -> Vec<Violation> {
    WesternElectricRules.check(&chart.x_series, &chart.x_limits)
}
