//! Interpolation accuracy validation.
//!
//! Validates the reconstruction quality contracts of the toolkit:
//!
//! - every method reproduces its own samples exactly (round-trip law)
//! - Sprague reconstruction beats linear reconstruction on smooth
//!   curves, including the boundary regions served by the edge
//!   extension
//! - extrapolation composes with either method without changing
//!   in-domain values

use chroma_algebra::{
    ExtrapolationMethod, Extrapolator, Interpolator, LinearInterpolator, SpragueInterpolator,
};

/// A smooth analytic curve sampled uniformly over [0, 10].
fn sine_series(step: f64) -> (Vec<f64>, Vec<f64>) {
    let count = (10.0 / step) as usize + 1;
    let x: Vec<f64> = (0..count).map(|i| f64::from(i as u32) * step).collect();
    let y: Vec<f64> = x.iter().map(|&v| v.sin()).collect();
    (x, y)
}

#[test]
fn round_trip_reproduces_samples_for_every_method() {
    let (x, y) = sine_series(0.5);

    let linear = LinearInterpolator::new(x.clone(), y.clone()).unwrap();
    let sprague = SpragueInterpolator::new(x.clone(), y.clone()).unwrap();
    let extrapolated = Extrapolator::new(
        SpragueInterpolator::new(x.clone(), y.clone()).unwrap(),
        ExtrapolationMethod::Linear,
    );

    assert_eq!(linear.evaluate_many(&x).unwrap(), y);
    assert_eq!(sprague.evaluate_many(&x).unwrap(), y);
    assert_eq!(extrapolated.evaluate_many(&x).unwrap(), y);
}

#[test]
fn sprague_beats_linear_off_nodes() {
    let (x, y) = sine_series(0.5);
    let linear = LinearInterpolator::new(x.clone(), y.clone()).unwrap();
    let sprague = SpragueInterpolator::new(x, y).unwrap();

    // Segment midpoints, covering the boundary windows as well as the
    // interior.
    let queries: Vec<f64> = (0..20).map(|i| 0.25 + f64::from(i) * 0.5).collect();

    let mut linear_total = 0.0;
    let mut sprague_total = 0.0;
    for &q in &queries {
        let truth = q.sin();
        let linear_error = (linear.evaluate(q).unwrap() - truth).abs();
        let sprague_error = (sprague.evaluate(q).unwrap() - truth).abs();
        linear_total += linear_error;
        sprague_total += sprague_error;

        // The quintic tracks the curve closer than the chord at every
        // off-node position.
        assert!(
            sprague_error < linear_error,
            "at {q}: sprague error {sprague_error} >= linear error {linear_error}"
        );
    }

    assert!(sprague_total < linear_total / 20.0);
}

#[test]
fn sprague_edge_windows_stay_accurate() {
    let (x, y) = sine_series(0.25);
    let sprague = SpragueInterpolator::new(x, y).unwrap();

    // The first and last half-steps lean on the synthetic boundary
    // samples; accuracy should not collapse there.
    for q in [0.05, 0.1, 0.2, 9.8, 9.9, 9.95] {
        let error = (sprague.evaluate(q).unwrap() - q.sin()).abs();
        assert!(error < 5e-3, "at {q}: error {error}");
    }
}

#[test]
fn extrapolation_composes_with_either_method() {
    let (x, y) = sine_series(0.5);

    let wrapped_linear = Extrapolator::new(
        LinearInterpolator::new(x.clone(), y.clone()).unwrap(),
        ExtrapolationMethod::Constant,
    );
    let wrapped_sprague = Extrapolator::new(
        SpragueInterpolator::new(x.clone(), y.clone()).unwrap(),
        ExtrapolationMethod::Constant,
    );

    for wrapped in [
        &wrapped_linear as &dyn Interpolator,
        &wrapped_sprague as &dyn Interpolator,
    ] {
        // held at the edge values outside the domain
        assert_eq!(wrapped.evaluate(-5.0).unwrap(), y[0]);
        assert_eq!(wrapped.evaluate(15.0).unwrap(), y[y.len() - 1]);
    }

    // in-domain values are untouched by the wrapper
    let inner = SpragueInterpolator::new(x, y).unwrap();
    assert_eq!(
        wrapped_sprague.evaluate(4.3).unwrap(),
        inner.evaluate(4.3).unwrap()
    );
}
