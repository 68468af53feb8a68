//! Tests for observation streams.
//!
//! ## Test Organization
//!
//! 1. **Generation** - `t = signal(x) + noise`
//! 2. **Exhaustion** - Errors, sentinel and iterator end
//! 3. **Composition** - Closures, accessors and parts

use std::cell::Cell;

use approx::assert_relative_eq;
use polycurve_rs::prelude::*;

// ============================================================================
// Generation Tests
// ============================================================================

/// Each observation is the signal at a fresh uniform draw plus one noise draw.
#[test]
fn test_generate_combines_signal_and_noise() {
    let source = ReplaySource::new(vec![0.25, 0.5]).unwrap();
    let mut stream = ObservationStream::new(source, |x: f64| 2.0 * x, || 0.5);

    assert_eq!(stream.generate(), Ok(Observation::new(0.25, 1.0)));
    assert_eq!(stream.generate(), Ok(Observation::new(0.5, 1.5)));
}

/// Without noise the target is exactly the signal.
#[test]
fn test_noiseless_stream() {
    let mut stream = ObservationStream::new(RngUniform::from_seed(3), Sinusoid::default(), NoNoise);

    for _ in 0..100 {
        let obs: Observation<f64> = stream.generate().unwrap();
        assert!((0.0..1.0).contains(&obs.x));
        assert_relative_eq!(obs.t, (std::f64::consts::TAU * obs.x).sin());
    }
}

/// Box–Muller noise is centred on the signal.
#[test]
fn test_noisy_stream_residuals() {
    let noise = BoxMuller::new(0.0_f64, 0.09, RngUniform::from_seed(21)).unwrap();
    let line = PolynomialSignal::new(vec![1.0, -1.0]);
    let stream = ObservationStream::new(RngUniform::from_seed(20), line, noise);

    let residuals: Vec<f64> = stream
        .take(20_000)
        .map(|obs| {
            let obs = obs.unwrap();
            obs.t - (1.0 - obs.x)
        })
        .collect();

    let (mean, variance) = sample_moments(&residuals).unwrap();
    assert!(mean.abs() < 1e-2);
    assert!((variance - 0.09).abs() < 1e-2);
}

/// The default sinusoid completes one period over `[0, 1)` in both precisions.
#[test]
fn test_default_sinusoid_period() {
    let f64_wave = Sinusoid::<f64>::default();
    assert_relative_eq!(f64_wave.eval(0.25), 1.0);
    assert_relative_eq!(f64_wave.eval(0.75), -1.0);
    assert!(f64_wave.eval(0.5).abs() < 1e-12);

    let f32_wave = Sinusoid::<f32>::default();
    assert_relative_eq!(f32_wave.eval(0.25), 1.0, epsilon = 1e-6);
    assert_relative_eq!(f32_wave.eval(0.75), -1.0, epsilon = 1e-6);
    assert!(f32_wave.eval(0.5).abs() < 1e-6);

    let shifted = Sinusoid::new(2.0_f64, 2.0, 0.0);
    assert_relative_eq!(shifted.eval(0.125), 2.0);
}

// ============================================================================
// Exhaustion Tests
// ============================================================================

/// Exhaustion is reported as an error and no noise is drawn for it.
#[test]
fn test_exhaustion_skips_noise() {
    let calls = Cell::new(0);
    let noise = || {
        calls.set(calls.get() + 1);
        0.0
    };
    let source = ReplaySource::new(vec![0.5]).unwrap();
    let mut stream = ObservationStream::new(source, |x: f64| x, noise);

    assert!(stream.generate().is_ok());
    assert_eq!(stream.generate(), Err(PolyFitError::ExhaustedInput));
    assert_eq!(stream.generate(), Err(PolyFitError::ExhaustedInput));
    assert_eq!(calls.get(), 1);
}

/// The sentinel form returns (-1, -1) next to the error.
#[test]
fn test_generate_with_sentinel() {
    let source = ReplaySource::new(vec![0.5]).unwrap();
    let mut stream = ObservationStream::new(source, |x: f64| x * x, NoNoise);

    let (obs, err) = stream.generate_with_sentinel();
    assert_eq!(obs, Observation::new(0.5, 0.25));
    assert_eq!(err, None);

    let (obs, err) = stream.generate_with_sentinel();
    assert_eq!(obs, Observation::sentinel());
    assert_eq!((obs.x, obs.t), (-1.0, -1.0));
    assert_eq!(err, Some(PolyFitError::ExhaustedInput));
}

/// As an iterator the stream ends cleanly on exhaustion.
#[test]
fn test_iterator_ends_on_exhaustion() {
    let source = ReplaySource::new(vec![0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();
    let stream = ObservationStream::new(source, |x: f64| x, NoNoise);

    let observations: Result<Vec<_>, _> = stream.collect();
    let observations = observations.unwrap();
    assert_eq!(observations.len(), 5);
    assert_eq!(observations[4], Observation::new(0.5, 0.5));
}

/// Failures other than exhaustion surface as `Err` items.
#[test]
fn test_iterator_yields_noise_failure() {
    let noise = BoxMuller::new(0.0_f64, 1.0, CyclicSource::new(vec![0.0]).unwrap()).unwrap();
    let mut stream = ObservationStream::new(RngUniform::from_seed(1), |x: f64| x, noise);

    assert!(matches!(
        stream.next(),
        Some(Err(PolyFitError::InvalidNumericValue(_)))
    ));
}

// ============================================================================
// Composition Tests
// ============================================================================

/// Fitting consumes exactly `samples` draws from the stream.
#[test]
fn test_fit_consumes_exact_draws() {
    let xs: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();
    let source = ReplaySource::new(xs).unwrap();
    let mut stream = ObservationStream::new(source, |x: f64| 1.0 + x, NoNoise);

    fit(&mut stream, 6, 2).unwrap();

    let (source, _, _) = stream.into_parts();
    assert_eq!(source.remaining(), 4);
}

/// The noise generator can be reached through the stream and reset.
#[test]
fn test_noise_access() {
    let noise = BoxMuller::new(0.0_f64, 1.0, RngUniform::from_seed(9)).unwrap();
    let mut stream = ObservationStream::new(RngUniform::from_seed(8), Sinusoid::default(), noise);

    let _: Observation<f64> = stream.generate().unwrap();
    assert!(stream.noise().state().has_cached);

    stream.noise_mut().reset();
    assert!(!stream.noise().state().has_cached);
    assert_eq!(stream.signal(), &Sinusoid::default());
}
