//! Diagnostic metrics for fitted polynomials.
//!
//! ## Purpose
//!
//! This module measures how far a fitted polynomial is from either the
//! observations it was fitted on, or the true signal those observations were
//! generated from.
//!
//! ## Design notes
//!
//! * **Residual-based**: Metrics are computed from residuals `t - p(x)`.
//! * **Signal comparison**: On a uniform grid over `[0, 1)`, the same metrics
//!   compare `p(x)` with the noiseless `signal(x)`.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * RMSE, MAE and max absolute error are non-negative.
//! * `max_abs_error >= rmse >= mae`.
//!
//! ## Non-goals
//!
//! * This module does not provide p-values or formal hypothesis tests.
//! * This module does not render plots.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::signal::SignalFunction;
use crate::engine::output::WeightVector;
use crate::primitives::observation::Observation;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Error metrics of a fitted polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Largest absolute deviation.
    pub max_abs_error: T,

    /// Number of points the metrics were computed over.
    pub points: usize,
}

impl<T: Float> Diagnostics<T> {
    /// Metrics of `weights` against observed pairs. `None` if `observations` is empty.
    pub fn from_samples(weights: &WeightVector<T>, observations: &[Observation<T>]) -> Option<Self> {
        let mut state = DiagnosticsState::new();
        for obs in observations {
            state.update(obs.t, weights.evaluate(obs.x));
        }
        state.finalize()
    }

    /// Metrics of `weights` against `signal` on the grid `x = k / grid_points`.
    /// `None` if `grid_points` is zero.
    pub fn against_signal<S>(weights: &WeightVector<T>, signal: &S, grid_points: usize) -> Option<Self>
    where
        S: SignalFunction<T> + ?Sized,
    {
        let mut state = DiagnosticsState::new();
        for (x, fitted) in weights.sample_curve(grid_points) {
            state.update(signal.eval(x), fitted);
        }
        state.finalize()
    }

    /// Root mean squared difference between `y` and `y_hat`.
    pub fn calculate_rmse(y: &[T], y_hat: &[T]) -> T {
        let mut state = DiagnosticsState::new();
        for (&a, &b) in y.iter().zip(y_hat.iter()) {
            state.update(a, b);
        }
        state.finalize().map_or(T::zero(), |d| d.rmse)
    }

    /// Mean absolute difference between `y` and `y_hat`.
    pub fn calculate_mae(y: &[T], y_hat: &[T]) -> T {
        let mut state = DiagnosticsState::new();
        for (&a, &b) in y.iter().zip(y_hat.iter()) {
            state.update(a, b);
        }
        state.finalize().map_or(T::zero(), |d| d.mae)
    }
}

// ============================================================================
// Running State
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct DiagnosticsState<T> {
    n: usize,
    sum_sq: T,
    sum_abs: T,
    max_abs: T,
}

impl<T: Float> DiagnosticsState<T> {
    fn new() -> Self {
        Self {
            n: 0,
            sum_sq: T::zero(),
            sum_abs: T::zero(),
            max_abs: T::zero(),
        }
    }

    fn update(&mut self, y: T, y_hat: T) {
        let r = (y - y_hat).abs();
        self.n += 1;
        self.sum_sq = self.sum_sq + r * r;
        self.sum_abs = self.sum_abs + r;
        self.max_abs = self.max_abs.max(r);
    }

    fn finalize(self) -> Option<Diagnostics<T>> {
        if self.n == 0 {
            return None;
        }
        let n = T::from(self.n)?;
        Some(Diagnostics {
            rmse: (self.sum_sq / n).sqrt(),
            mae: self.sum_abs / n,
            max_abs_error: self.max_abs,
            points: self.n,
        })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  Points:        {}", self.points)?;
        writeln!(f, "  RMSE:          {:.6}", self.rmse)?;
        writeln!(f, "  MAE:           {:.6}", self.mae)?;
        writeln!(f, "  Max abs error: {:.6}", self.max_abs_error)
    }
}
