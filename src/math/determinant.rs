//! Determinants by Gaussian elimination.
//!
//! ## Purpose
//!
//! This module computes the determinant of a small dense square matrix and
//! reports enough about the elimination to decide whether the matrix is
//! numerically singular.
//!
//! ## Design notes
//!
//! * **Partial pivoting**: The largest remaining entry of each column is
//!   swapped onto the diagonal; each swap flips the determinant's sign.
//! * **O(n^3)**: Elimination instead of cofactor expansion.
//! * **Row-major**: Matrices are flat `n * n` slices in row-major order.
//!
//! ## Key concepts
//!
//! * **Pivot ratio**: The smallest pivot relative to the largest input entry.
//!   A determinant can be tiny for a perfectly well-posed Gram matrix (it
//!   shrinks geometrically with the order), so singularity is judged on the
//!   pivots instead of the raw determinant.
//!
//! ## Invariants
//!
//! * The input slice is never modified; elimination works on a copy.
//! * A matrix with an all-zero pivot column has determinant exactly zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Elimination Summary
// ============================================================================

/// Outcome of eliminating a square matrix to upper-triangular form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elimination<T> {
    /// Determinant (product of pivots with the row-swap sign applied).
    pub determinant: T,
    /// Smallest absolute pivot encountered.
    pub min_pivot: T,
    /// Largest absolute entry of the input matrix.
    pub scale: T,
}

impl<T: Float> Elimination<T> {
    /// Eliminate a row-major `n × n` matrix.
    pub fn of(matrix: &[T], n: usize) -> Self {
        debug_assert_eq!(matrix.len(), n * n);

        let scale = matrix.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()));
        let mut a: Vec<T> = matrix.to_vec();
        let mut determinant = T::one();
        let mut min_pivot = T::infinity();

        for col in 0..n {
            // Select pivot row
            let mut pivot_row = col;
            let mut pivot_abs = a[col * n + col].abs();
            for row in (col + 1)..n {
                let v = a[row * n + col].abs();
                if v > pivot_abs {
                    pivot_abs = v;
                    pivot_row = row;
                }
            }

            if pivot_abs == T::zero() || pivot_abs.is_nan() {
                return Self {
                    determinant: T::zero(),
                    min_pivot: T::zero(),
                    scale,
                };
            }

            if pivot_row != col {
                for k in 0..n {
                    a.swap(col * n + k, pivot_row * n + k);
                }
                determinant = -determinant;
            }

            let pivot = a[col * n + col];
            determinant = determinant * pivot;
            min_pivot = min_pivot.min(pivot_abs);

            for row in (col + 1)..n {
                let factor = a[row * n + col] / pivot;
                if factor == T::zero() {
                    continue;
                }
                for k in col..n {
                    a[row * n + k] = a[row * n + k] - factor * a[col * n + k];
                }
            }
        }

        if n == 0 {
            min_pivot = T::zero();
        }

        Self {
            determinant,
            min_pivot,
            scale,
        }
    }

    /// Whether the matrix should be treated as singular at the given relative tolerance.
    #[inline]
    pub fn is_singular(&self, tolerance: T) -> bool {
        self.determinant == T::zero()
            || !self.determinant.is_finite()
            || self.scale == T::zero()
            || self.min_pivot <= tolerance * self.scale
    }
}

/// Determinant of a row-major `n × n` matrix.
#[inline]
pub fn determinant<T: Float>(matrix: &[T], n: usize) -> T {
    Elimination::of(matrix, n).determinant
}
