//! Sample statistics for checking generated distributions.
//!
//! These are the summary numbers used to compare a noise generator's output
//! with its target distribution: sample mean and variance, and the fraction of
//! draws falling in an interval.

// External dependencies
use num_traits::Float;

/// Sample mean and (population) variance. `None` for an empty slice.
pub fn sample_moments<T: Float>(samples: &[T]) -> Option<(T, T)> {
    if samples.is_empty() {
        return None;
    }
    let n = T::from(samples.len())?;
    let mean = samples.iter().fold(T::zero(), |acc, &v| acc + v) / n;
    let variance = samples
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - mean) * (v - mean))
        / n;
    Some((mean, variance))
}

/// Fraction of `samples` in `[lower, upper)`; a missing bound is unbounded.
///
/// Returns zero for an empty slice.
pub fn empirical_probability<T: Float>(samples: &[T], lower: Option<T>, upper: Option<T>) -> T {
    let Some(n) = T::from(samples.len()).filter(|n| *n > T::zero()) else {
        return T::zero();
    };
    let count = samples
        .iter()
        .filter(|&&v| lower.is_none_or(|lb| v >= lb) && upper.is_none_or(|ub| v < ub))
        .count();
    T::from(count).map_or(T::zero(), |c| c / n)
}
