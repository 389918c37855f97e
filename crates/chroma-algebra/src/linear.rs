//! Piecewise-linear interpolation.

use crate::error::AlgebraResult;
use crate::interpolate::{Interpolator, clamp_to_domain, validate_series};

/// Piecewise-linear interpolant over an ordered 1-D sample series.
///
/// Works on regular and irregular domains alike and requires at least
/// two samples. Each query is resolved by locating the bracketing
/// segment with a binary search and blending its endpoints, so a query
/// at a sample node returns the stored value exactly.
///
/// Queries outside the sampled domain are a contract violation at this
/// layer and fail with a domain error; wrap the interpolant in an
/// [`Extrapolator`](crate::Extrapolator) for out-of-range behaviour.
///
/// # Example
///
/// ```rust
/// use chroma_algebra::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(
///     vec![0.0, 1.0, 2.0],
///     vec![0.0, 10.0, 0.0],
/// ).unwrap();
///
/// assert_eq!(interp.evaluate(0.5).unwrap(), 5.0);
/// assert_eq!(interp.evaluate(1.5).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LinearInterpolator {
    /// Builds a linear interpolant from a sample series.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidSeries`](crate::AlgebraError::InvalidSeries)
    /// if `x` and `y` differ in length, hold fewer than two samples, or
    /// `x` is not strictly increasing.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> AlgebraResult<Self> {
        validate_series(&x, &y, 2)?;
        Ok(Self { x, y })
    }
}

impl Interpolator for LinearInterpolator {
    fn x(&self) -> &[f64] {
        &self.x
    }

    fn y(&self) -> &[f64] {
        &self.y
    }

    fn evaluate(&self, x: f64) -> AlgebraResult<f64> {
        let (min, max) = self.domain();
        let x = clamp_to_domain(x, min, max)?;

        // Left endpoint of the bracketing segment; the top edge folds
        // into the last segment, where t = 1.
        let i = self
            .x
            .partition_point(|&node| node <= x)
            .saturating_sub(1)
            .min(self.x.len() - 2);

        let t = (x - self.x[i]) / (self.x[i + 1] - self.x[i]);
        // Convex form: both segment endpoints reproduce exactly.
        Ok(self.y[i] * (1.0 - t) + self.y[i + 1] * t)
    }
}
