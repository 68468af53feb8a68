//! Normal-equation accumulation over the power basis.
//!
//! ## Purpose
//!
//! This module accumulates the sufficient statistics of a polynomial
//! least-squares fit, one observation at a time:
//!
//! ```text
//! G[i][j] += x^(i+j)      (Gram matrix, order × order)
//! c[i]    += t · x^i      (moment vector, length order)
//! ```
//!
//! ## Design notes
//!
//! * **Lockstep**: The Gram matrix and moment vector are only ever updated
//!   together, from the same observation.
//! * **Shared powers**: `x^0 .. x^(2·order-2)` are computed once per observation
//!   and reused for every entry.
//! * **Mergeable**: Partial accumulators over disjoint observation sets can be
//!   combined with [`NormalEquations::merge`].
//!
//! ## Invariants
//!
//! * `gram` is symmetric.
//! * `samples` counts exactly the observations folded into both structures.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::polynomial;
use crate::primitives::observation::Observation;

/// Gram matrix and moment vector accumulated from observations.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquations<T> {
    order: usize,
    /// Row-major `order × order`.
    gram: Vec<T>,
    moments: Vec<T>,
    powers: Vec<T>,
    samples: usize,
}

impl<T: Float> NormalEquations<T> {
    /// Zeroed accumulator for `order` coefficients.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            gram: vec![T::zero(); order * order],
            moments: vec![T::zero(); order],
            powers: vec![T::zero(); (2 * order).saturating_sub(1)],
            samples: 0,
        }
    }

    /// Fold one observation into the Gram matrix and moment vector.
    pub fn accumulate(&mut self, observation: Observation<T>) {
        let n = self.order;
        polynomial::fill_powers(observation.x, &mut self.powers);

        for i in 0..n {
            let row = &mut self.gram[i * n..(i + 1) * n];
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = *entry + self.powers[i + j];
            }
            self.moments[i] = self.moments[i] + observation.t * self.powers[i];
        }
        self.samples += 1;
    }

    /// Add another accumulator of the same order into this one.
    ///
    /// # Panics
    ///
    /// Panics if the orders differ.
    pub fn merge(&mut self, other: &Self) {
        assert_eq!(self.order, other.order, "cannot merge different orders");
        for (a, &b) in self.gram.iter_mut().zip(other.gram.iter()) {
            *a = *a + b;
        }
        for (a, &b) in self.moments.iter_mut().zip(other.moments.iter()) {
            *a = *a + b;
        }
        self.samples += other.samples;
    }

    /// Reset to the zeroed state.
    pub fn clear(&mut self) {
        self.gram.iter_mut().for_each(|v| *v = T::zero());
        self.moments.iter_mut().for_each(|v| *v = T::zero());
        self.samples = 0;
    }

    /// Number of coefficients.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of observations accumulated.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Row-major Gram matrix.
    pub fn gram(&self) -> &[T] {
        &self.gram
    }

    /// Moment vector.
    pub fn moments(&self) -> &[T] {
        &self.moments
    }
}
