//! Fitted polynomial coefficients.
//!
//! ## Purpose
//!
//! This module defines [`WeightVector`], the terminal output of a fit: the
//! coefficients `w_0 .. w_{order-1}` of `p(x) = Σ w_i x^i`.
//!
//! ## Design notes
//!
//! * **Immutable**: Coefficients are fixed once produced; there are no setters.
//! * **Pure evaluation**: `evaluate` has no hidden state, so repeated calls agree.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Non-goals
//!
//! * This module does not plot; `sample_curve` only produces the points a
//!   plotting tool would draw.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::ops::Index;
use num_traits::Float;

// Internal dependencies
use crate::math::polynomial;

// ============================================================================
// Weight Vector
// ============================================================================

/// Coefficients of a fitted polynomial, in ascending power order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector<T> {
    coefficients: Vec<T>,
}

impl<T: Float> WeightVector<T> {
    /// Wrap coefficients in ascending power order.
    pub fn new(coefficients: Vec<T>) -> Self {
        Self { coefficients }
    }

    /// Coefficients in ascending power order.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Number of coefficients.
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluate `p(x) = Σ w_i x^i`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        polynomial::evaluate(&self.coefficients, x)
    }

    /// Evaluate at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// `(x, p(x))` on the uniform grid `x = k / grid_points`, `k = 0 .. grid_points`.
    pub fn sample_curve(&self, grid_points: usize) -> Vec<(T, T)> {
        let Some(denom) = T::from(grid_points) else {
            return Vec::new();
        };
        (0..grid_points)
            .filter_map(|k| T::from(k).map(|k| k / denom))
            .map(|x| (x, self.evaluate(x)))
            .collect()
    }

    /// Consume and return the coefficients.
    pub fn into_vec(self) -> Vec<T> {
        self.coefficients
    }
}

impl<T> Index<usize> for WeightVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.coefficients[index]
    }
}

impl<T> AsRef<[T]> for WeightVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.coefficients
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for WeightVector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Order: {}", self.coefficients.len())?;
        writeln!(f)?;
        writeln!(f, "Coefficients:")?;
        writeln!(f, "  {:>6} {:>16}", "Power", "Weight")?;
        writeln!(f, "  {}", "-".repeat(23))?;
        for (i, w) in self.coefficients.iter().enumerate() {
            writeln!(f, "  {:>6} {:>16.6}", i, w)?;
        }
        Ok(())
    }
}
