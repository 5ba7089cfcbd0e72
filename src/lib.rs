//! # spc-analytics
//!
//! Statistical process control (SPC) analytics for quality-inspection
//! measurements: descriptive statistics, Shewhart I-MR control charts,
//! process capability indices, and distribution histograms.
//!
//! The engine is the pure numeric core of a quality-reporting system: an
//! external acquisition layer collects and filters the measurements, an
//! external presentation layer renders and exports the result. This crate
//! is only the transformation in between — stateless, deterministic, no
//! I/O, safe to call concurrently because nothing is shared between calls.
//!
//! ## Modules
//!
//! - [`analyzer`] — The [`analyze`] entry point and the [`AnalysisResult`] it produces
//! - [`chart`] — Individual and Moving Range (I-MR) chart builder
//! - [`capability`] — Process capability indices (Cp, Cpk, Pp, Ppk)
//! - [`distribution`] — Square-root-rule histogram binning
//! - [`rules`] — Western Electric run rules over the built chart
//! - [`stats`] — Numerically stable descriptive statistics
//! - [`error`] — The [`AnalysisError`] taxonomy
//!
//! ## Example
//!
//! ```
//! use spc_analytics::{analyze, Measurement};
//!
//! let measurements: Vec<Measurement> = [10.0, 12.0, 11.0, 13.0, 9.0]
//!     .iter()
//!     .map(|&v| Measurement::new(v, 5.0, 15.0))
//!     .collect();
//!
//! let result = analyze(&measurements).unwrap();
//! assert_eq!(result.control_chart.range_series.len(), 4);
//! assert!((result.capability.cpk - 0.84).abs() < 1e-12);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one call, one immutable result; no hidden state
//! - **Full precision inside, presentation rounding at the boundary**
//! - **Numerical stability**: Kahan summation and Welford's algorithm
//! - **Research-backed**: chart factors and indices follow Montgomery (2019)
//!   and ASTM E2587

#![warn(missing_docs)]

pub mod analyzer;
pub mod capability;
pub mod chart;
pub mod distribution;
pub mod error;
pub mod measurement;
pub mod rules;
pub mod stats;

pub use analyzer::{analyze, AnalysisResult, Descriptive};
pub use capability::Capability;
pub use chart::{ChartPoint, ControlChartSummary, ControlLimits};
pub use distribution::{Bin, Distribution};
pub use error::AnalysisError;
pub use measurement::Measurement;
pub use rules::{RunRule, Violation, ViolationKind, WesternElectricRules};
