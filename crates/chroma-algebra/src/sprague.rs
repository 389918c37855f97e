//! Sprague (1880) fifth-order interpolation.
//!
//! The method recommended by CIE 167:2005 for interpolating uniformly
//! sampled spectral data. A local quintic is fitted through the six
//! samples surrounding each query, which produces a far smoother curve
//! than piecewise-linear reconstruction while still passing exactly
//! through every original sample.
//!
//! # Reference
//!
//! CIE 167:2005, Recommended Practice for Tabulating Spectral Data for
//! Use in Colour Computations.

use crate::common::{EPSILON, is_uniform};
use crate::error::{AlgebraError, AlgebraResult};
use crate::interpolate::{Interpolator, clamp_to_domain, validate_series};

/// Boundary-extension coefficients, CIE 167:2005.
///
/// Rows give the two synthetic samples prepended before the first real
/// sample (from the first six) and the two appended after the last
/// (from the last six), each as a linear combination divided by 209.
const BOUNDARY_COEFFICIENTS: [[f64; 6]; 4] = [
    [884.0, -1960.0, 3033.0, -2648.0, 1080.0, -180.0],
    [508.0, -540.0, 488.0, -367.0, 144.0, -24.0],
    [-24.0, 144.0, -367.0, 488.0, -540.0, 508.0],
    [-180.0, 1080.0, -2648.0, 3033.0, -1960.0, 884.0],
];

fn boundary_point(coefficients: &[f64; 6], samples: &[f64]) -> f64 {
    coefficients
        .iter()
        .zip(samples)
        .map(|(c, y)| c * y)
        .sum::<f64>()
        / 209.0
}

/// Sprague interpolant over a uniformly sampled 1-D series.
///
/// Requires at least six samples on a uniform domain; both conditions
/// are checked at construction, never at evaluation. Construction also
/// precomputes the boundary-extended series, so queries near the domain
/// edges keep full six-point accuracy instead of running out of real
/// neighbours.
///
/// Queries outside the sampled domain fail with a domain error, same as
/// [`LinearInterpolator`](crate::LinearInterpolator); combine with an
/// [`Extrapolator`](crate::Extrapolator) for out-of-range behaviour.
///
/// # Example
///
/// ```rust
/// use chroma_algebra::{Interpolator, SpragueInterpolator};
///
/// let interp = SpragueInterpolator::new(
///     vec![380.0, 385.0, 390.0, 395.0, 400.0, 405.0],
///     vec![0.11, 0.125, 0.185, 0.35, 0.62, 0.91],
/// ).unwrap();
///
/// // Passes exactly through the samples
/// assert_eq!(interp.evaluate(390.0).unwrap(), 0.185);
/// // Smooth estimate in between
/// let value = interp.evaluate(392.5).unwrap();
/// assert!(value > 0.185 && value < 0.35);
/// ```
#[derive(Debug, Clone)]
pub struct SpragueInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Range with two synthetic samples on each side.
    extended: Vec<f64>,
    step: f64,
}

impl SpragueInterpolator {
    /// Builds a Sprague interpolant from a uniformly sampled series.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidSeries`] if `x` and `y` differ in
    /// length, hold fewer than six samples, `x` is not strictly
    /// increasing, or the domain spacing is not uniform.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> AlgebraResult<Self> {
        validate_series(&x, &y, 6)?;
        if !is_uniform(&x) {
            return Err(AlgebraError::InvalidSeries(
                "Sprague interpolation requires a uniformly spaced domain".into(),
            ));
        }

        let step = x[1] - x[0];
        let head = &y[..6];
        let tail = &y[y.len() - 6..];

        let mut extended = Vec::with_capacity(y.len() + 4);
        extended.push(boundary_point(&BOUNDARY_COEFFICIENTS[0], head));
        extended.push(boundary_point(&BOUNDARY_COEFFICIENTS[1], head));
        extended.extend_from_slice(&y);
        extended.push(boundary_point(&BOUNDARY_COEFFICIENTS[2], tail));
        extended.push(boundary_point(&BOUNDARY_COEFFICIENTS[3], tail));

        Ok(Self { x, y, extended, step })
    }

    /// The uniform domain spacing.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Interpolator for SpragueInterpolator {
    fn x(&self) -> &[f64] {
        &self.x
    }

    fn y(&self) -> &[f64] {
        &self.y
    }

    fn evaluate(&self, x: f64) -> AlgebraResult<f64> {
        let (min, max) = self.domain();
        let x = clamp_to_domain(x, min, max)?;

        // Position in step units from the first sample.
        let position = (x - min) / self.step;

        // A query within tolerance of a node returns the stored sample.
        let nearest = position.round();
        if (position - nearest).abs() * self.step <= EPSILON {
            let node = nearest as usize;
            if node < self.y.len() {
                return Ok(self.y[node]);
            }
        }

        let i = (position.floor() as usize).min(self.y.len() - 2);
        let t = position - i as f64;

        // Window of six surrounding samples in the extended series,
        // centred on the bracketing segment.
        let r = &self.extended;
        let j = i + 2;

        let a0 = r[j];
        let a1 = (2.0 * r[j - 2] - 16.0 * r[j - 1] + 16.0 * r[j + 1] - 2.0 * r[j + 2]) / 24.0;
        let a2 = (-r[j - 2] + 16.0 * r[j - 1] - 30.0 * r[j] + 16.0 * r[j + 1] - r[j + 2]) / 24.0;
        let a3 = (-9.0 * r[j - 2] + 39.0 * r[j - 1] - 70.0 * r[j] + 66.0 * r[j + 1]
            - 33.0 * r[j + 2]
            + 7.0 * r[j + 3])
            / 24.0;
        let a4 = (13.0 * r[j - 2] - 64.0 * r[j - 1] + 126.0 * r[j] - 124.0 * r[j + 1]
            + 61.0 * r[j + 2]
            - 12.0 * r[j + 3])
            / 24.0;
        let a5 = (-5.0 * r[j - 2] + 25.0 * r[j - 1] - 50.0 * r[j] + 50.0 * r[j + 1]
            - 25.0 * r[j + 2]
            + 5.0 * r[j + 3])
            / 24.0;

        Ok(a0 + t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)))))
    }
}
