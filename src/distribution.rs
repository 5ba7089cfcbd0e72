//! Distribution histogram binning.
//!
//! Bins the measured values into `ceil(sqrt(n))` equal-width bins for the
//! histogram panel of the report, using the square-root choice of bin
//! count common in quality dashboards.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::stats;

/// One histogram bin: the center of its interval and how many values fell
/// into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Midpoint of the bin interval, the histogram X coordinate.
    pub center: f64,
    /// Number of values in the bin.
    pub count: usize,
}

/// Histogram of the measured values plus the overlay statistics the
/// renderer draws on top of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Bins in index order (ascending centers).
    pub bins: Vec<Bin>,
    /// Number of bins, `ceil(sqrt(n))`.
    pub bin_count: usize,
    /// Mean of the values (full precision, for the normal-curve overlay).
    pub mean: f64,
    /// Sample standard deviation of the values.
    pub std_dev: f64,
    /// Specification midpoint, `(usl + lsl) / 2`.
    pub target: f64,
}

/// Bins a value sequence into `ceil(sqrt(n))` equal-width bins.
///
/// Every value lands in exactly one bin: the bin index is clamped so the
/// maximum value falls into the last bin instead of overflowing past it.
/// Zero-width data (all values identical) degenerates to all counts in
/// bin 0.
///
/// `mean` and `std_dev` are the overall statistics of the same values;
/// `target` is the specification midpoint. They ride along so the
/// histogram panel is self-contained.
///
/// # Errors
///
/// [`AnalysisError::InsufficientData`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use spc_analytics::distribution::bin_values;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
/// let dist = bin_values(&values, 5.0, 2.7386, 5.0).unwrap();
/// assert_eq!(dist.bin_count, 3); // ceil(sqrt(9))
/// assert_eq!(dist.bins.iter().map(|b| b.count).sum::<usize>(), 9);
/// ```
pub fn bin_values(
    values: &[f64],
    mean: f64,
    std_dev: f64,
    target: f64,
) -> Result<Distribution, AnalysisError> {
    let n = values.len();
    if n == 0 {
        return Err(AnalysisError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let bin_count = (n as f64).sqrt().ceil() as usize;
    let min = stats::min(values).ok_or(AnalysisError::InsufficientData {
        required: 1,
        actual: 0,
    })?;
    let max = stats::max(values).ok_or(AnalysisError::InsufficientData {
        required: 1,
        actual: 0,
    })?;
    let bin_width = (max - min) / bin_count as f64;

    let mut counts = vec![0_usize; bin_count];
    for &v in values {
        // Zero-width data: everything belongs to bin 0.
        let idx = if bin_width == 0.0 {
            0
        } else {
            (((v - min) / bin_width).floor() as usize).min(bin_count - 1)
        };
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            center: min + i as f64 * bin_width + bin_width / 2.0,
            count,
        })
        .collect();

    Ok(Distribution {
        bins,
        bin_count,
        mean,
        std_dev,
        target,
    })
}
