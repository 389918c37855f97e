//! Extrapolation beyond a sampled domain.

use std::fmt;
use std::str::FromStr;

use crate::error::{AlgebraError, AlgebraResult};
use crate::interpolate::Interpolator;

/// How an [`Extrapolator`] computes values outside the sampled domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtrapolationMethod {
    /// Continue the straight line through the two samples nearest the
    /// crossed edge.
    #[default]
    Linear,

    /// Hold the edge sample's value.
    Constant,
}

impl FromStr for ExtrapolationMethod {
    type Err = AlgebraError;

    /// Parses a method name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidConfiguration`] for anything other
    /// than `"linear"` or `"constant"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "constant" => Ok(Self::Constant),
            _ => Err(AlgebraError::InvalidConfiguration(format!(
                "unknown extrapolation method: {s:?}"
            ))),
        }
    }
}

impl fmt::Display for ExtrapolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Constant => write!(f, "Constant"),
        }
    }
}

/// Extends any interpolant beyond its sampled domain.
///
/// In-range queries delegate directly to the wrapped interpolant with no
/// change in semantics; only out-of-range queries are handled here,
/// using the configured [`ExtrapolationMethod`]. Optional left/right
/// fill values override the computed extrapolation on their side.
///
/// The wrapper implements [`Interpolator`] itself, so it composes with
/// anything that consumes the trait.
///
/// # Example
///
/// ```rust
/// use chroma_algebra::{
///     ExtrapolationMethod, Extrapolator, Interpolator, LinearInterpolator,
/// };
///
/// let interp = LinearInterpolator::new(
///     vec![0.0, 1.0, 2.0],
///     vec![0.0, 1.0, 4.0],
/// ).unwrap();
/// let extrap = Extrapolator::new(interp, ExtrapolationMethod::Linear);
///
/// assert_eq!(extrap.evaluate(-1.0).unwrap(), -1.0);
/// assert_eq!(extrap.evaluate(3.0).unwrap(), 7.0);
/// // in range: plain interpolation
/// assert_eq!(extrap.evaluate(0.5).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Extrapolator<I: Interpolator> {
    interpolator: I,
    method: ExtrapolationMethod,
    left: Option<f64>,
    right: Option<f64>,
}

impl<I: Interpolator> Extrapolator<I> {
    /// Wraps an interpolant with the given extrapolation method.
    pub fn new(interpolator: I, method: ExtrapolationMethod) -> Self {
        Self {
            interpolator,
            method,
            left: None,
            right: None,
        }
    }

    /// Wraps an interpolant with explicit fill values.
    ///
    /// A fill value, when set, is returned for every query beyond its
    /// side of the domain instead of the method's computed value.
    pub fn with_fill(
        interpolator: I,
        method: ExtrapolationMethod,
        left: Option<f64>,
        right: Option<f64>,
    ) -> Self {
        Self {
            interpolator,
            method,
            left,
            right,
        }
    }

    /// The configured extrapolation method.
    #[inline]
    pub fn method(&self) -> ExtrapolationMethod {
        self.method
    }

    /// Consumes the wrapper, returning the wrapped interpolant.
    pub fn into_inner(self) -> I {
        self.interpolator
    }
}

impl<I: Interpolator> Interpolator for Extrapolator<I> {
    fn x(&self) -> &[f64] {
        self.interpolator.x()
    }

    fn y(&self) -> &[f64] {
        self.interpolator.y()
    }

    fn evaluate(&self, x: f64) -> AlgebraResult<f64> {
        let xs = self.interpolator.x();
        let ys = self.interpolator.y();
        let last = xs.len() - 1;

        if x < xs[0] {
            if let Some(fill) = self.left {
                return Ok(fill);
            }
            return Ok(match self.method {
                ExtrapolationMethod::Constant => ys[0],
                ExtrapolationMethod::Linear => {
                    ys[0] + (x - xs[0]) * (ys[1] - ys[0]) / (xs[1] - xs[0])
                }
            });
        }

        if x > xs[last] {
            if let Some(fill) = self.right {
                return Ok(fill);
            }
            return Ok(match self.method {
                ExtrapolationMethod::Constant => ys[last],
                ExtrapolationMethod::Linear => {
                    ys[last] + (x - xs[last]) * (ys[last] - ys[last - 1]) / (xs[last] - xs[last - 1])
                }
            });
        }

        self.interpolator.evaluate(x)
    }
}
