//! Power-basis polynomial helpers.
//!
//! ## Purpose
//!
//! This module provides the two primitive operations on the power basis
//! `1, x, x^2, ...`: filling a buffer with successive powers of `x`, and
//! evaluating `Σ w_i x^i` for a coefficient slice.
//!
//! ## Design notes
//!
//! * **Horner**: Evaluation uses Horner's scheme (one multiply-add per term).
//! * **Repeated multiplication**: Powers are built incrementally rather than
//!   with `powi`, so each `x^k` costs one multiplication.
//!
//! ## Invariants
//!
//! * `evaluate(&[], x) == 0`.
//! * Both functions are pure.

// External dependencies
use num_traits::Float;

/// Evaluate `Σ coefficients[i] · x^i` with Horner's scheme.
#[inline]
pub fn evaluate<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &w| acc * x + w)
}

/// Fill `out` with `x^0, x^1, ..., x^(out.len() - 1)`.
#[inline]
pub fn fill_powers<T: Float>(x: T, out: &mut [T]) {
    let mut p = T::one();
    for slot in out.iter_mut() {
        *slot = p;
        p = p * x;
    }
}
