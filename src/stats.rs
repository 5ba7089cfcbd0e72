//! Descriptive statistics with numerical stability guarantees.
//!
//! All functions handle edge cases explicitly and use numerically stable
//! algorithms to avoid catastrophic cancellation.
//!
//! # Algorithms
//!
//! - **Mean**: Kahan compensated summation for O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).

/// Computes a sum using Kahan compensated summation.
///
/// Accumulates a compensation term to recover lost low-order bits,
/// achieving O(ε) total error independent of the input length.
///
/// # Examples
/// ```
/// use spc_analytics::stats::kahan_sum;
/// assert!((kahan_sum(&[1.0, 2.0, 3.0]) - 6.0).abs() < 1e-15);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Computes the arithmetic mean using Kahan compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use spc_analytics::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the sample variance using Welford's online algorithm.
///
/// Returns the **sample** (unbiased) variance with Bessel's correction
/// (denominator `n − 1`). Welford's method maintains a running mean and
/// sum of squared deviations, avoiding the catastrophic cancellation
/// inherent in the naive formula `Var = E[X²] − (E[X])²`.
///
/// Reference: Welford (1962), *Technometrics* 4(3), pp. 419–420.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use spc_analytics::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut count = 0_u64;
    let mut mean_acc = 0.0_f64;
    let mut m2 = 0.0_f64;
    for &x in data {
        count += 1;
        let delta = x - mean_acc;
        mean_acc += delta / count as f64;
        let delta2 = x - mean_acc;
        m2 += delta * delta2;
    }
    Some(m2 / (count - 1) as f64)
}

/// Computes the sample standard deviation.
///
/// Equivalent to `sqrt(variance(data))`.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use spc_analytics::stats::std_dev;
/// let v = [10.0, 12.0, 11.0, 13.0, 9.0];
/// assert!((std_dev(&v).unwrap() - 1.5811388300841898).abs() < 1e-10);
/// ```
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        let v = [10.0, 12.0, 11.0, 13.0, 9.0];
        assert!((mean(&v).unwrap() - 11.0).abs() < 1e-15);
    }

    #[test]
    fn test_mean_empty() {
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn test_mean_rejects_nan() {
        assert!(mean(&[1.0, f64::NAN]).is_none());
    }

    #[test]
    fn test_variance_needs_two_points() {
        assert!(variance(&[5.0]).is_none());
        assert!(variance(&[5.0, 5.0]).is_some());
    }

    #[test]
    fn test_std_dev_of_constant_is_zero() {
        let v = [7.5; 10];
        assert_eq!(std_dev(&v).unwrap(), 0.0);
    }

    #[test]
    fn test_std_dev_textbook() {
        // Sample std dev of [10, 12, 11, 13, 9] = sqrt(2.5) = 1.5811...
        let v = [10.0, 12.0, 11.0, 13.0, 9.0];
        assert!((std_dev(&v).unwrap() - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_min_max() {
        let v = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(min(&v), Some(1.0));
        assert_eq!(max(&v), Some(5.0));
        assert!(min(&[]).is_none());
        assert!(max(&[f64::NAN]).is_none());
    }

    #[test]
    fn test_kahan_sum_precision() {
        // Summing many small values next to a large one loses bits with
        // naive accumulation; Kahan recovers them.
        let mut data = vec![1e10];
        data.extend(std::iter::repeat(1e-6).take(1000));
        let s = kahan_sum(&data);
        assert!((s - (1e10 + 1e-3)).abs() < 1e-9);
    }
}
