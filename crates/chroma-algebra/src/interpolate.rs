//! The interpolator capability shared by all 1-D reconstruction methods.

use crate::common::EPSILON;
use crate::error::{AlgebraError, AlgebraResult};

/// A function fitted to a finite ordered sample series.
///
/// An interpolator reproduces its sample values exactly and estimates
/// values between them. Implementors own an immutable series and expose
/// scalar and batch evaluation over its domain; everything is pure, so
/// instances are freely shareable across threads.
///
/// Queries outside the sampled domain fail with
/// [`AlgebraError::OutOfDomain`]; out-of-range behaviour belongs to
/// [`Extrapolator`](crate::Extrapolator), which wraps any implementor of
/// this trait.
pub trait Interpolator {
    /// The sampled x-values, strictly increasing.
    fn x(&self) -> &[f64];

    /// The sampled y-values, same length as [`x`](Interpolator::x).
    fn y(&self) -> &[f64];

    /// The sampled domain as `(min, max)`.
    fn domain(&self) -> (f64, f64) {
        let x = self.x();
        (x[0], x[x.len() - 1])
    }

    /// Evaluates the interpolant at a single query point.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::OutOfDomain`] if `x` lies outside the
    /// sampled domain by more than the shared tolerance.
    fn evaluate(&self, x: f64) -> AlgebraResult<f64>;

    /// Evaluates the interpolant at every query point, in input order.
    ///
    /// Each element is handled independently by the scalar rule; the
    /// batch fails as a whole on the first offending element.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`evaluate`](Interpolator::evaluate).
    fn evaluate_many(&self, xs: &[f64]) -> AlgebraResult<Vec<f64>> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// Validates the shared sample-series preconditions.
///
/// Checks length match, the per-method minimum point count, and strict
/// monotonicity of the domain.
pub(crate) fn validate_series(x: &[f64], y: &[f64], min_points: usize) -> AlgebraResult<()> {
    if x.len() != y.len() {
        return Err(AlgebraError::InvalidSeries(format!(
            "domain has {} samples but range has {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < min_points {
        return Err(AlgebraError::InvalidSeries(format!(
            "at least {} samples required, got {}",
            min_points,
            x.len()
        )));
    }
    if x.windows(2).any(|pair| pair[1] <= pair[0]) {
        return Err(AlgebraError::InvalidSeries(
            "domain values must be strictly increasing".into(),
        ));
    }
    Ok(())
}

/// Applies the inclusive-boundary policy to a query point.
///
/// Queries within [`EPSILON`] of an edge are clamped onto it, so a
/// nominal-node query that floating rounding placed fractionally outside
/// the domain still evaluates. Anything further out is a domain error.
pub(crate) fn clamp_to_domain(x: f64, min: f64, max: f64) -> AlgebraResult<f64> {
    if x < min - EPSILON || x > max + EPSILON {
        return Err(AlgebraError::OutOfDomain { x, min, max });
    }
    Ok(x.clamp(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let result = validate_series(&[0.0, 1.0, 2.0], &[0.0, 1.0], 2);
        assert!(matches!(result, Err(AlgebraError::InvalidSeries(_))));
    }

    #[test]
    fn test_validate_rejects_too_few_points() {
        let result = validate_series(&[0.0], &[0.0], 2);
        assert!(matches!(result, Err(AlgebraError::InvalidSeries(_))));
    }

    #[test]
    fn test_validate_rejects_unsorted_domain() {
        let result = validate_series(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0], 2);
        assert!(matches!(result, Err(AlgebraError::InvalidSeries(_))));
        // duplicates are also non-increasing
        let result = validate_series(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0], 2);
        assert!(matches!(result, Err(AlgebraError::InvalidSeries(_))));
    }

    #[test]
    fn test_clamp_to_domain() {
        assert_eq!(clamp_to_domain(0.5, 0.0, 1.0).unwrap(), 0.5);
        // within tolerance of an edge: clamped onto it
        assert_eq!(clamp_to_domain(-1e-12, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(clamp_to_domain(1.0 + 1e-12, 0.0, 1.0).unwrap(), 1.0);
        // beyond tolerance: domain error
        assert!(matches!(
            clamp_to_domain(-0.5, 0.0, 1.0),
            Err(AlgebraError::OutOfDomain { .. })
        ));
    }
}
