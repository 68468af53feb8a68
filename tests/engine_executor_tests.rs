//! Tests for polynomial fit execution.
//!
//! These tests drive complete fits from observation streams:
//! - Exact recovery of known polynomials
//! - Singular and short inputs
//! - Agreement between the Cramer and QR solvers
//! - Noisy fits of a sinusoid
//!
//! ## Test Organization
//!
//! 1. **Recovery** - Interpolation and overdetermined noiseless fits
//! 2. **Failures** - Singular systems, exhaustion, non-finite values
//! 3. **Solvers** - Cramer versus QR
//! 4. **Noisy Fits** - Sinusoid under Box–Muller noise
//! 5. **Phases** - Separate accumulate/solve and merging

use approx::assert_abs_diff_eq;
use polycurve_rs::api::NormalEquations;
use polycurve_rs::prelude::*;

fn polynomial_stream(
    xs: Vec<f64>,
    coefficients: Vec<f64>,
) -> ObservationStream<f64, ReplaySource<f64>, PolynomialSignal<f64>, NoNoise> {
    let source = ReplaySource::new(xs).unwrap();
    ObservationStream::new(source, PolynomialSignal::new(coefficients), NoNoise)
}

// ============================================================================
// Recovery Tests
// ============================================================================

/// With `samples == order` distinct points the fit interpolates exactly.
#[test]
fn test_interpolation_recovers_cubic() {
    let truth = vec![1.0, -2.0, 0.5, 3.0];
    let mut stream = polynomial_stream(vec![0.1, 0.35, 0.6, 0.9], truth.clone());

    let weights = fit(&mut stream, 4, 4).unwrap();

    assert_eq!(weights.order(), 4);
    for (w, expected) in weights.coefficients().iter().zip(truth.iter()) {
        assert_abs_diff_eq!(*w, *expected, epsilon = 1e-6);
    }
}

/// Interpolation of a quadratic through three points.
#[test]
fn test_interpolation_recovers_quadratic() {
    let truth = vec![0.5, 1.5, -4.0];
    let mut stream = polynomial_stream(vec![0.0, 0.5, 0.75], truth.clone());

    let weights = fit(&mut stream, 3, 3).unwrap();

    for i in 0..3 {
        assert_abs_diff_eq!(weights[i], truth[i], epsilon = 1e-6);
    }
}

/// A noiseless line is recovered from many random points.
#[test]
fn test_overdetermined_line() {
    let line = PolynomialSignal::new(vec![3.0, 2.0]);
    let mut stream = ObservationStream::new(RngUniform::from_seed(11), line, NoNoise);

    let weights: WeightVector<f64> = fit(&mut stream, 50, 2).unwrap();

    assert_abs_diff_eq!(weights[0], 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(weights[1], 2.0, epsilon = 1e-9);
}

/// Over-parameterizing a line leaves the extra coefficients at zero.
#[test]
fn test_overparameterized_line() {
    let line = PolynomialSignal::new(vec![-1.0, 0.5]);
    let mut stream = ObservationStream::new(RngUniform::from_seed(12), line, NoNoise);

    let weights: WeightVector<f64> = fit(&mut stream, 200, 4).unwrap();

    assert_abs_diff_eq!(weights[0], -1.0, epsilon = 1e-7);
    assert_abs_diff_eq!(weights[1], 0.5, epsilon = 1e-7);
    assert_abs_diff_eq!(weights[2], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(weights[3], 0.0, epsilon = 1e-6);
}

/// Order 1 fits the mean of the targets.
#[test]
fn test_order_one_is_mean() {
    let source = ReplaySource::new(vec![0.1, 0.2, 0.3, 0.4]).unwrap();
    let targets = [2.0, 4.0, 6.0, 12.0];
    let mut k = 0;
    let offsets = move || {
        let t = targets[k];
        k += 1;
        t
    };
    let mut stream = ObservationStream::new(source, |_: f64| 0.0, offsets);

    let weights = fit(&mut stream, 4, 1).unwrap();
    assert_abs_diff_eq!(weights[0], 6.0, epsilon = 1e-12);
}

// ============================================================================
// Failure Tests
// ============================================================================

/// Identical inputs make the Gram matrix singular.
#[test]
fn test_identical_inputs_are_singular() {
    let source = CyclicSource::new(vec![0.5]).unwrap();
    let noise = BoxMuller::new(0.0_f64, 1.0, RngUniform::from_seed(4)).unwrap();
    let mut stream = ObservationStream::new(source, Sinusoid::default(), noise);

    assert_eq!(
        fit(&mut stream, 50, 2),
        Err(PolyFitError::SingularSystem {
            order: 2,
            samples: 50
        })
    );

    let source = CyclicSource::new(vec![0.3]).unwrap();
    let mut stream = ObservationStream::new(source, Sinusoid::default(), NoNoise);
    assert!(matches!(
        fit::<f64, _>(&mut stream, 20, 3),
        Err(PolyFitError::SingularSystem { order: 3, .. })
    ));
}

/// Fewer distinct inputs than coefficients is singular too.
#[test]
fn test_too_few_distinct_inputs() {
    let source = CyclicSource::new(vec![0.2, 0.7]).unwrap();
    let mut stream = ObservationStream::new(source, Sinusoid::default(), NoNoise);
    assert!(matches!(
        fit::<f64, _>(&mut stream, 40, 3),
        Err(PolyFitError::SingularSystem { .. })
    ));

    // Fewer samples than coefficients
    let mut stream = ObservationStream::new(RngUniform::from_seed(6), Sinusoid::default(), NoNoise);
    assert!(matches!(
        fit::<f64, _>(&mut stream, 2, 3),
        Err(PolyFitError::SingularSystem { .. })
    ));
}

/// Both solvers reject the same singular input.
#[test]
fn test_qr_rejects_singular() {
    let fitter = PolyFit::<f64>::new().order(2).samples(10).solver(Qr).build().unwrap();
    let source = CyclicSource::new(vec![0.5]).unwrap();
    let mut stream = ObservationStream::new(source, Sinusoid::default(), NoNoise);

    assert!(matches!(
        fitter.fit(&mut stream),
        Err(PolyFitError::SingularSystem { .. })
    ));
}

/// A stream that runs dry mid-fit becomes `InsufficientData`.
#[test]
fn test_exhaustion_is_insufficient_data() {
    let xs: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();
    let mut stream = polynomial_stream(xs, vec![1.0, 1.0]);

    assert_eq!(
        fit(&mut stream, 20, 2),
        Err(PolyFitError::InsufficientData {
            got: 10,
            needed: 20
        })
    );
}

/// Non-finite targets abort the fit.
#[test]
fn test_non_finite_observation() {
    let source = ReplaySource::new(vec![0.1, 0.9, 0.4]).unwrap();
    let signal = |x: f64| if x > 0.5 { f64::NAN } else { x };
    let mut stream = ObservationStream::new(source, signal, NoNoise);

    assert!(matches!(
        fit(&mut stream, 3, 2),
        Err(PolyFitError::InvalidNumericValue(_))
    ));
}

/// A noise generator running dry ends the fit like the input source would.
#[test]
fn test_noise_exhaustion_is_insufficient_data() {
    let noise = BoxMuller::new(0.0_f64, 1.0, ReplaySource::new(vec![0.5, 0.5]).unwrap()).unwrap();
    let mut stream = ObservationStream::new(RngUniform::from_seed(2), |x: f64| x, noise);

    // One Box-Muller pair covers two observations
    assert_eq!(
        fit(&mut stream, 5, 2),
        Err(PolyFitError::InsufficientData { got: 2, needed: 5 })
    );
}

/// Other noise failures propagate unchanged.
#[test]
fn test_noise_failure_propagates() {
    let noise = BoxMuller::new(0.0_f64, 1.0, CyclicSource::new(vec![0.0]).unwrap()).unwrap();
    let mut stream = ObservationStream::new(RngUniform::from_seed(2), |x: f64| x, noise);

    assert!(matches!(
        fit(&mut stream, 5, 2),
        Err(PolyFitError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Solver Tests
// ============================================================================

/// Cramer and QR agree on a well-conditioned noisy fit.
#[test]
fn test_cramer_matches_qr() {
    let cramer = PolyFit::<f64>::new().order(4).samples(500).build().unwrap();
    let qr = PolyFit::<f64>::new().order(4).samples(500).solver(Qr).build().unwrap();

    let make_stream = || {
        let noise = BoxMuller::new(0.0_f64, 0.01, RngUniform::from_seed(31)).unwrap();
        ObservationStream::new(RngUniform::from_seed(30), Sinusoid::default(), noise)
    };

    let a = cramer.fit(&mut make_stream()).unwrap();
    let b = qr.fit(&mut make_stream()).unwrap();

    for x in [0.0, 0.2, 0.5, 0.8, 0.99] {
        assert_abs_diff_eq!(a.evaluate(x), b.evaluate(x), epsilon = 1e-8);
    }
}

/// The f32 path recovers a line as well.
#[test]
fn test_f32_fit() {
    let line = PolynomialSignal::new(vec![1.0_f32, -0.5]);
    let mut stream = ObservationStream::new(RngUniform::from_seed(13), line, NoNoise);

    let weights = fit(&mut stream, 100, 2).unwrap();
    assert_abs_diff_eq!(weights[0], 1.0_f32, epsilon = 1e-3);
    assert_abs_diff_eq!(weights[1], -0.5_f32, epsilon = 1e-3);
}

// ============================================================================
// Noisy Fit Tests
// ============================================================================

/// An order-8 fit of sin(2πx) over 1000 noisy samples tracks the signal.
#[test]
fn test_noisy_sinusoid_order_eight() {
    let noise = BoxMuller::new(0.0_f64, 0.04, RngUniform::from_seed(8)).unwrap();
    let mut stream = ObservationStream::new(RngUniform::from_seed(7), Sinusoid::default(), noise);

    let weights = fit::<f64, _>(&mut stream, 1000, 8).unwrap();
    assert_eq!(weights.order(), 8);
    assert!(weights.coefficients().iter().all(|w| w.is_finite()));

    let diagnostics = Diagnostics::against_signal(&weights, &Sinusoid::default(), 200).unwrap();
    assert!(diagnostics.rmse < 0.1, "{diagnostics}");
}

/// Evaluation is pure: repeated calls agree bit for bit.
#[test]
fn test_evaluate_is_idempotent() {
    let noise = BoxMuller::new(0.0_f64, 0.25, RngUniform::from_seed(40)).unwrap();
    let mut stream = ObservationStream::new(RngUniform::from_seed(41), Sinusoid::default(), noise);
    let weights = fit::<f64, _>(&mut stream, 100, 5).unwrap();

    for x in [0.0, 0.3, 0.7, 1.0] {
        assert_eq!(weights.evaluate(x).to_bits(), weights.evaluate(x).to_bits());
    }
}

// ============================================================================
// Phase Tests
// ============================================================================

/// Merging accumulations from two streams matches one longer fit.
#[test]
fn test_merged_accumulation() {
    let fitter = PolyFit::<f64>::new().order(3).samples(50).build().unwrap();
    let truth = vec![0.25, -1.0, 2.0];

    let xs: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
    let (first, second) = xs.split_at(50);

    let mut a = fitter
        .accumulate(&mut polynomial_stream(first.to_vec(), truth.clone()))
        .unwrap();
    let b = fitter
        .accumulate(&mut polynomial_stream(second.to_vec(), truth.clone()))
        .unwrap();
    a.merge(&b);
    assert_eq!(a.samples(), 100);

    let weights = fitter.solve(&a).unwrap();
    for i in 0..3 {
        assert_abs_diff_eq!(weights[i], truth[i], epsilon = 1e-8);
    }
}

/// Solving equations of the wrong order is rejected.
#[test]
fn test_solve_rejects_order_mismatch() {
    let fitter = PolyFit::<f64>::new().order(3).build().unwrap();
    let equations = NormalEquations::<f64>::new(2);
    assert_eq!(fitter.solve(&equations), Err(PolyFitError::InvalidOrder(2)));
}
