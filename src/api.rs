//! High-level API for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring a fit, and the one-call [`fit`] function.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyFitBuilder`] via `PolyFit::new()`.
//! 2. Chain configuration methods (`.order()`, `.samples()`, etc.).
//! 3. Call `.build()` to get a [`PolynomialFitter`].
//! 4. Call `.fit(&mut stream)` to draw observations and solve.

// External dependencies
use core::fmt::Debug;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::noise::{BoxMuller, BoxMullerState, NoNoise, NoiseSource};
pub use crate::algorithms::normal_equations::NormalEquations;
pub use crate::algorithms::signal::{PolynomialSignal, SignalFunction, Sinusoid};
pub use crate::algorithms::solver::SolverKind;
pub use crate::engine::executor::PolynomialFitter;
pub use crate::engine::output::WeightVector;
pub use crate::engine::stream::{ObservationSource, ObservationStream};
pub use crate::engine::validator::MAX_ORDER;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::evaluation::statistics::{empirical_probability, sample_moments};
pub use crate::math::linalg::FloatLinalg;
pub use crate::primitives::errors::PolyFitError;
pub use crate::primitives::observation::Observation;
pub use crate::primitives::uniform::{CyclicSource, ReplaySource, RngUniform, UniformSource};

/// Default number of coefficients (a straight line).
pub const DEFAULT_ORDER: usize = 2;

/// Default number of observations per fit.
pub const DEFAULT_SAMPLES: usize = 100;

/// Default relative singularity tolerance, in multiples of machine epsilon.
pub const DEFAULT_TOLERANCE_EPSILONS: f64 = 4096.0;

/// Fluent builder for configuring a polynomial fit.
#[derive(Debug, Clone)]
pub struct PolyFitBuilder<T: FloatLinalg + Debug> {
    /// Number of coefficients (polynomial degree + 1).
    pub order: Option<usize>,

    /// Observations drawn per fit.
    pub samples: Option<usize>,

    /// Normal-equation solver.
    pub solver: Option<SolverKind>,

    /// Relative singularity tolerance.
    pub tolerance: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + Debug> Default for PolyFitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + Debug> PolyFitBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            order: None,
            samples: None,
            solver: None,
            tolerance: None,
            duplicate_param: None,
        }
    }

    /// Set the number of coefficients (degree + 1).
    pub fn order(mut self, order: usize) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    /// Set the number of observations drawn per fit.
    pub fn samples(mut self, samples: usize) -> Self {
        if self.samples.is_some() {
            self.duplicate_param = Some("samples");
        }
        self.samples = Some(samples);
        self
    }

    /// Set the normal-equation solver.
    pub fn solver(mut self, solver: SolverKind) -> Self {
        if self.solver.is_some() {
            self.duplicate_param = Some("solver");
        }
        self.solver = Some(solver);
        self
    }

    /// Set the relative singularity tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Validate the configuration and produce a fitter.
    pub fn build(self) -> Result<PolynomialFitter<T>, PolyFitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let order = self.order.unwrap_or(DEFAULT_ORDER);
        Validator::validate_order(order)?;

        let samples = self.samples.unwrap_or(DEFAULT_SAMPLES);
        Validator::validate_sample_count(samples)?;

        let tolerance = self.tolerance.unwrap_or_else(default_tolerance);
        Validator::validate_tolerance(tolerance)?;

        Ok(PolynomialFitter {
            order,
            samples,
            solver: self.solver.unwrap_or_default(),
            tolerance,
        })
    }
}

/// `DEFAULT_TOLERANCE_EPSILONS × ε` for `T` (about 9.1e-13 for f64).
pub fn default_tolerance<T: FloatLinalg>() -> T {
    T::epsilon() * T::from(DEFAULT_TOLERANCE_EPSILONS).unwrap_or_else(T::one)
}

/// Fit a polynomial with `order` coefficients to `sample_count` draws of `stream`.
///
/// Uses the default solver (Cramer's rule) and tolerance.
pub fn fit<T, G>(
    stream: &mut G,
    sample_count: usize,
    order: usize,
) -> Result<WeightVector<T>, PolyFitError>
where
    T: FloatLinalg + Debug,
    G: ObservationSource<T> + ?Sized,
{
    PolyFitBuilder::new()
        .order(order)
        .samples(sample_count)
        .build()?
        .fit(stream)
}
