//! # chroma-algebra
//!
//! Numerical algebra toolkit for colorimetric and spectral data.
//!
//! This crate provides the resampling and fitting machinery used across
//! CHROMA-RS: 1-D interpolation, extrapolation, ordinary least-squares
//! regression, sampling-domain statistics, and a matrix identity
//! predicate.
//!
//! # Interpolation
//!
//! - [`LinearInterpolator`] - piecewise-linear reconstruction over
//!   regular or irregular domains
//! - [`SpragueInterpolator`] - fifth-order method recommended by
//!   CIE 167:2005 for uniformly sampled spectral data
//! - [`Extrapolator`] - extends any [`Interpolator`] beyond its sampled
//!   domain, with [`Linear`](ExtrapolationMethod::Linear) or
//!   [`Constant`](ExtrapolationMethod::Constant) continuation
//!
//! Interpolants pass exactly through their samples; queries outside the
//! sampled domain fail unless wrapped in an [`Extrapolator`].
//!
//! # Usage
//!
//! ```rust
//! use chroma_algebra::{
//!     ExtrapolationMethod, Extrapolator, Interpolator, SpragueInterpolator,
//! };
//!
//! // A uniformly sampled spectral curve
//! let nm: Vec<f64> = (0..8).map(|i| 380.0 + 5.0 * i as f64).collect();
//! let values = vec![0.061, 0.063, 0.068, 0.078, 0.095, 0.125, 0.172, 0.234];
//!
//! let curve = SpragueInterpolator::new(nm, values).unwrap();
//! let resampled = Extrapolator::new(curve, ExtrapolationMethod::Constant);
//!
//! // Resample at 1 nm, slightly past both edges
//! let queries: Vec<f64> = (0..40).map(|i| 378.0 + i as f64).collect();
//! let spectrum = resampled.evaluate_many(&queries).unwrap();
//! assert_eq!(spectrum.len(), queries.len());
//! ```
//!
//! # Tolerance
//!
//! All floating-point comparisons (step uniformity, node detection,
//! boundary inclusion, matrix identity) use the single absolute
//! tolerance [`EPSILON`].
//!
//! # Dependencies
//!
//! - [`glam`] - f64 matrix types for the identity predicate
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `chroma-bench` - Benchmarks and pipeline composition

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod common;
mod error;
mod extrapolate;
mod interpolate;
mod linear;
mod matrix;
mod regression;
mod sprague;

pub use common::{EPSILON, closest, is_uniform, steps};
pub use error::{AlgebraError, AlgebraResult};
pub use extrapolate::{ExtrapolationMethod, Extrapolator};
pub use interpolate::Interpolator;
pub use linear::LinearInterpolator;
pub use matrix::is_identity;
pub use regression::{LinearFit, linear_regression};
pub use sprague::SpragueInterpolator;
