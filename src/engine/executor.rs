//! Polynomial fit execution.
//!
//! ## Purpose
//!
//! This module runs a complete least-squares fit: it pulls a fixed number of
//! observations from a source, accumulates the normal equations, and solves
//! them for the coefficient vector.
//!
//! ## Design notes
//!
//! * **Single pass**: Observations are consumed once and never stored.
//! * **Split phases**: [`PolynomialFitter::accumulate`] and
//!   [`PolynomialFitter::solve`] are exposed separately so partial
//!   accumulations (e.g. from independent streams) can be merged first.
//! * **No partial results**: Any error aborts the fit; nothing is returned
//!   alongside it.
//!
//! ## Key concepts
//!
//! * **Exhaustion**: A source that runs dry before `samples` draws turns into
//!   `InsufficientData`.
//! * **Singularity**: Judged on elimination pivots relative to the Gram
//!   matrix scale (see `math::determinant`).
//!
//! ## Invariants
//!
//! * The Gram matrix and moment vector always come from the same draws.
//! * Non-finite observations never reach the accumulator.

// External dependencies
use tracing::{debug, warn};

// Internal dependencies
use crate::algorithms::normal_equations::NormalEquations;
use crate::algorithms::solver::SolverKind;
use crate::engine::output::WeightVector;
use crate::engine::stream::ObservationSource;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::PolyFitError;

// ============================================================================
// Fitter
// ============================================================================

/// A validated fit configuration, ready to consume observation sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialFitter<T> {
    pub(crate) order: usize,
    pub(crate) samples: usize,
    pub(crate) solver: SolverKind,
    pub(crate) tolerance: T,
}

impl<T: FloatLinalg> PolynomialFitter<T> {
    /// Number of coefficients to fit.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of observations each fit draws.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Solver used for the normal equations.
    pub fn solver(&self) -> SolverKind {
        self.solver
    }

    /// Relative singularity tolerance.
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Draw `samples` observations and return the fitted coefficients.
    pub fn fit<G>(&self, source: &mut G) -> Result<WeightVector<T>, PolyFitError>
    where
        G: ObservationSource<T> + ?Sized,
    {
        debug!(
            order = self.order,
            samples = self.samples,
            solver = self.solver.name(),
            "starting polynomial fit"
        );
        let equations = self.accumulate(source)?;
        let weights = self.solve(&equations)?;
        debug!(order = self.order, "polynomial fit complete");
        Ok(weights)
    }

    /// Draw `samples` observations into a fresh set of normal equations.
    pub fn accumulate<G>(&self, source: &mut G) -> Result<NormalEquations<T>, PolyFitError>
    where
        G: ObservationSource<T> + ?Sized,
    {
        let mut equations = NormalEquations::new(self.order);

        for drawn in 0..self.samples {
            let observation = match source.generate() {
                Ok(observation) => observation,
                Err(PolyFitError::ExhaustedInput) => {
                    return Err(PolyFitError::InsufficientData {
                        got: drawn,
                        needed: self.samples,
                    });
                }
                Err(err) => return Err(err),
            };
            Validator::validate_observation(&observation, drawn)?;
            equations.accumulate(observation);
        }

        Ok(equations)
    }

    /// Solve accumulated normal equations for the coefficients.
    pub fn solve(&self, equations: &NormalEquations<T>) -> Result<WeightVector<T>, PolyFitError> {
        if equations.order() != self.order {
            return Err(PolyFitError::InvalidOrder(equations.order()));
        }

        match self.solver.solve(
            equations.gram(),
            equations.moments(),
            self.order,
            self.tolerance,
        ) {
            Some(coefficients) => Ok(WeightVector::new(coefficients)),
            None => {
                warn!(
                    order = self.order,
                    samples = equations.samples(),
                    "gram matrix is numerically singular"
                );
                Err(PolyFitError::SingularSystem {
                    order: self.order,
                    samples: equations.samples(),
                })
            }
        }
    }
}
