//! Normal-equation solvers.
//!
//! ## Purpose
//!
//! This module solves `G · w = c` for the polynomial coefficients once the
//! Gram matrix `G` and moment vector `c` have been accumulated.
//!
//! ## Design notes
//!
//! * **Cramer (default)**: `w_i = det(G_i) / det(G)`, where `G_i` is `G` with
//!   column `i` replaced by `c`. Each determinant is an O(n^3) elimination, so
//!   the whole solve is O(n^4). Accuracy degrades quickly past order 8 to 10.
//! * **QR**: Householder QR through nalgebra. Same contract, better conditioning.
//! * **Shared singularity check**: Both solvers reject `G` when its elimination
//!   has a pivot below `tolerance × max|G_ij|`, so switching solvers never
//!   changes which inputs are rejected.
//!
//! ## Invariants
//!
//! * A returned solution never contains NaN or infinite values.
//!
//! ## Non-goals
//!
//! * This module does not regularize or otherwise repair singular systems.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::determinant::{Elimination, determinant};
use crate::math::linalg::FloatLinalg;

// ============================================================================
// Solver Kind
// ============================================================================

/// Method used to solve the normal equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverKind {
    /// Determinant ratios (Cramer's rule).
    #[default]
    Cramer,

    /// Householder QR decomposition.
    Qr,
}

impl SolverKind {
    /// Short lowercase name, used in log events.
    pub const fn name(&self) -> &'static str {
        match self {
            SolverKind::Cramer => "cramer",
            SolverKind::Qr => "qr",
        }
    }

    /// Solve the row-major `n × n` system, or `None` if it is numerically singular.
    pub fn solve<T: FloatLinalg>(
        &self,
        gram: &[T],
        moments: &[T],
        n: usize,
        tolerance: T,
    ) -> Option<Vec<T>> {
        match self {
            SolverKind::Cramer => solve_cramer(gram, moments, n, tolerance),
            SolverKind::Qr => solve_qr(gram, moments, n, tolerance),
        }
    }
}

// ============================================================================
// Cramer's Rule
// ============================================================================

/// Solve `G · w = c` by determinant ratios, or `None` if `G` is numerically singular.
pub fn solve_cramer<T: Float>(gram: &[T], moments: &[T], n: usize, tolerance: T) -> Option<Vec<T>> {
    let elimination = Elimination::of(gram, n);
    if elimination.is_singular(tolerance) {
        return None;
    }
    finite(cramer_with_determinant(gram, moments, n, elimination.determinant))
}

fn cramer_with_determinant<T: Float>(gram: &[T], moments: &[T], n: usize, det: T) -> Vec<T> {
    let mut replaced = gram.to_vec();
    let mut weights = Vec::with_capacity(n);

    for i in 0..n {
        replaced.copy_from_slice(gram);
        for (row, &c) in moments.iter().enumerate() {
            replaced[row * n + i] = c;
        }
        weights.push(determinant(&replaced, n) / det);
    }

    weights
}

// ============================================================================
// QR
// ============================================================================

/// Solve `G · w = c` through nalgebra QR, rejecting `G` by the same pivot rule as Cramer.
pub fn solve_qr<T: FloatLinalg>(gram: &[T], moments: &[T], n: usize, tolerance: T) -> Option<Vec<T>> {
    if Elimination::of(gram, n).is_singular(tolerance) {
        return None;
    }
    finite(T::solve_qr(gram, moments, n)?)
}

fn finite<T: Float>(solution: Vec<T>) -> Option<Vec<T>> {
    solution.iter().all(|w| w.is_finite()).then_some(solution)
}
