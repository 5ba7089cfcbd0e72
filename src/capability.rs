//! Process capability and performance indices.
//!
//! Quantifies how well the measured process fits inside its specification
//! band. Short-term capability (Cp family) and long-term performance
//! (Pp family) are both reported.
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*,
//!   8th ed., Chapter 8.
//! - Kane (1986), "Process Capability Indices", *Journal of Quality
//!   Technology* 18(1), pp. 41-52.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Computed capability and performance indices for a two-sided
/// specification.
///
/// Both index families are derived from the same overall standard
/// deviation, so `pp == cp`, `ppu == cpu`, `ppl == cpl`, and `ppk == cpk`.
/// A rigorous treatment would estimate the Cp family from within-subgroup
/// variation (average moving range / d2) instead; the single-estimate
/// behavior is kept for compatibility with the reports consumers already
/// reconcile against.
///
/// # Index interpretation
///
/// | Index | Value | Interpretation |
/// |-------|-------|----------------|
/// | Cp/Pp | >= 1.33 | Process is capable |
/// | Cpk/Ppk | >= 1.33 | Process is capable and centered |
///
/// Reference: Montgomery (2019), Chapter 8, Table 8.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    /// Cp = (USL - LSL) / (6 sigma).
    pub cp: f64,
    /// Cpu = (USL - mean) / (3 sigma).
    pub cpu: f64,
    /// Cpl = (mean - LSL) / (3 sigma).
    pub cpl: f64,
    /// Cpk = min(Cpu, Cpl).
    pub cpk: f64,
    /// Pp, equal to Cp (single dispersion estimate).
    pub pp: f64,
    /// Ppu, equal to Cpu.
    pub ppu: f64,
    /// Ppl, equal to Cpl.
    pub ppl: f64,
    /// Ppk, equal to Cpk.
    pub ppk: f64,
    /// Lower specification limit the indices were computed against.
    pub lsl: f64,
    /// Upper specification limit the indices were computed against.
    pub usl: f64,
}

/// Computes capability indices from the overall mean and standard
/// deviation against a two-sided specification.
///
/// # Errors
///
/// - [`AnalysisError::InvalidSpecification`] if `usl <= lsl` (capability
///   math assumes a positive tolerance band).
/// - [`AnalysisError::ZeroDispersion`] if `std_dev == 0` (all measurements
///   identical, ratios undefined).
///
/// # Examples
///
/// ```
/// use spc_analytics::capability::compute_capability;
///
/// let cap = compute_capability(11.0, 1.5811388300841898, 5.0, 15.0).unwrap();
/// assert!((cap.cp - 1.054).abs() < 0.001);
/// assert!((cap.cpk - 0.843).abs() < 0.001);
/// ```
pub fn compute_capability(
    mean: f64,
    std_dev: f64,
    lsl: f64,
    usl: f64,
) -> Result<Capability, AnalysisError> {
    if usl <= lsl {
        return Err(AnalysisError::InvalidSpecification { lsl, usl });
    }
    if std_dev == 0.0 {
        return Err(AnalysisError::ZeroDispersion);
    }

    let cp = (usl - lsl) / (6.0 * std_dev);
    let cpu = (usl - mean) / (3.0 * std_dev);
    let cpl = (mean - lsl) / (3.0 * std_dev);
    let cpk = cpu.min(cpl);

    Ok(Capability {
        cp,
        cpu,
        cpl,
        cpk,
        pp: cp,
        ppu: cpu,
        ppl: cpl,
        ppk: cpk,
        lsl,
        usl,
    })
}
