//! # polycurve-rs: Noisy Observations and Polynomial Curve Fitting for Rust
//!
//! A small experimentation harness for studying how well a least-squares
//! polynomial recovers an unknown signal as noise and polynomial order vary.
//!
//! ## What does it do?
//!
//! The crate has two halves:
//!
//! 1. **Observation synthesis**: a uniform source draws `x` in `[0, 1)`, a
//!    signal function gives the true value, and a Box–Muller generator adds
//!    Gaussian noise: `t = signal(x) + noise`.
//! 2. **Polynomial fitting**: a fixed number of observations is folded into
//!    the normal equations `G · w = c` over the basis `1, x, x^2, ...`, which
//!    are then solved for the coefficient vector `w`.
//!
//! ```text
//! UniformSource ──► SignalFunction ─┐
//!                                   ├──► ObservationStream ──► PolynomialFitter ──► WeightVector
//! UniformSource ──► BoxMuller ──────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use polycurve_rs::prelude::*;
//!
//! // sin(2πx) observed with Normal(0, 0.04) noise
//! let noise = BoxMuller::new(0.0_f64, 0.04, RngUniform::from_seed(8))?;
//! let mut stream = ObservationStream::new(RngUniform::from_seed(7), Sinusoid::default(), noise);
//!
//! // Cubic fit (4 coefficients) over 200 observations
//! let fitter = PolyFit::new().order(4).samples(200).build()?;
//! let weights = fitter.fit(&mut stream)?;
//!
//! println!("{}", weights);
//! println!("p(0.25) = {}", weights.evaluate(0.25));
//! # Result::<(), PolyFitError>::Ok(())
//! ```
//!
//! For a one-off fit with default settings, use [`fit`](api::fit):
//!
//! ```rust
//! use polycurve_rs::prelude::*;
//!
//! // Noiseless line 3 + 2x
//! let line = PolynomialSignal::new(vec![3.0_f64, 2.0]);
//! let mut stream = ObservationStream::new(RngUniform::from_seed(1), line, NoNoise);
//!
//! let weights = fit(&mut stream, 50, 2)?;
//! assert!((weights[0] - 3.0).abs() < 1e-8);
//! assert!((weights[1] - 2.0).abs() < 1e-8);
//! # Result::<(), PolyFitError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, PolyFitError>`:
//!
//! - **`ExhaustedInput`**: a finite uniform source ran out (stop iterating).
//! - **`InsufficientData`**: the stream ran out before the fit drew enough observations.
//! - **`SingularSystem`**: the Gram matrix is numerically singular (e.g. all `x`
//!   identical, or fewer distinct `x` values than coefficients).
//! - **`InvalidNumericValue`**: a NaN/∞ observation or degenerate noise draw.
//!
//! No partial results are returned alongside an error.
//!
//! ## Parameters
//!
//! | Parameter     | Default      | Range/Options     | Description                                 |
//! |---------------|--------------|-------------------|---------------------------------------------|
//! | **order**     | 2            | [1, 16]           | Number of coefficients (degree + 1)         |
//! | **samples**   | 100          | [1, ∞)            | Observations drawn per fit                  |
//! | **solver**    | `Cramer`     | `Cramer`, `Qr`    | Normal-equation solver                      |
//! | **tolerance** | 4096·ε       | (0, ∞)            | Relative pivot threshold for singularity    |
//!
//! ### Solvers
//!
//! - **`Cramer`** solves by determinant ratios. It is simple and exact enough
//!   for small orders but loses accuracy quickly past order 8 to 10.
//! - **`Qr`** uses nalgebra's Householder QR and is better conditioned. Both
//!   reject the same singular inputs.
//!
//! ## Noise
//!
//! [`BoxMuller`](api::BoxMuller) produces Normal(mean, variance) samples two at a
//! time and caches the second. Each generator owns its own uniform source, and
//! its toggle state can be inspected with `state()` or cleared with `reset()`.
//! Use [`NoNoise`](api::NoNoise) or any `FnMut() -> T` closure for other noise.
//!
//! ## Logging
//!
//! Fits emit `tracing` events (`debug` at start/end, `warn` on singular systems
//! and resampled noise draws). Install any `tracing` subscriber to see them.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library; `alloc` is required.
//!
//! ```toml
//! [dependencies]
//! polycurve-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data types and basic utilities.
//
// Contains the error type, observations, and uniform sources.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains polynomial evaluation, determinants, and the nalgebra bridge.
mod math;

// Layer 3: Algorithms - noise, signals, accumulation and solvers.
mod algorithms;

// Layer 4: Engine - streams, fit execution, validation and output.
mod engine;

// Layer 5: Evaluation - diagnostics and sample statistics.
mod evaluation;

// High-level fluent API.
//
// Provides the `PolyFit` builder and the one-call `fit` function.
pub mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polycurve_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        BoxMuller, BoxMullerState, CyclicSource, Diagnostics, MAX_ORDER, NoNoise, NoiseSource,
        Observation, ObservationSource, ObservationStream, PolyFitBuilder as PolyFit, PolyFitError,
        PolynomialFitter, PolynomialSignal, ReplaySource, RngUniform, SignalFunction, Sinusoid,
        SolverKind,
        SolverKind::{Cramer, Qr},
        UniformSource, WeightVector, empirical_probability, fit, sample_moments,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
}
