//! Error types for the algebra toolkit.

use thiserror::Error;

/// Result type for algebra operations.
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Errors that can occur while building or evaluating interpolants.
///
/// The three variants map to the three failure classes of the toolkit:
/// construction-time precondition violations, evaluation-time domain
/// violations, and configuration parsing failures. Nothing is recovered
/// silently; every failure propagates to the caller as one of these.
#[derive(Debug, Error)]
pub enum AlgebraError {
    /// The sample series violates a construction precondition
    /// (length mismatch, too few points, non-increasing or non-uniform
    /// domain). Raised at construction, never deferred to evaluation.
    #[error("invalid sample series: {0}")]
    InvalidSeries(String),

    /// A query point lies outside the sampled domain of an interpolant
    /// that was not wrapped in an [`Extrapolator`](crate::Extrapolator).
    #[error("query point {x} is outside the sampled domain [{min}, {max}]")]
    OutOfDomain {
        /// The offending query point.
        x: f64,
        /// Lower edge of the sampled domain.
        min: f64,
        /// Upper edge of the sampled domain.
        max: f64,
    },

    /// A configuration value could not be understood, e.g. an unknown
    /// extrapolation method name.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
