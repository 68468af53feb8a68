//! Observed (input, target) pairs.
//!
//! An [`Observation`] is produced once per pull from an observation stream and
//! is never mutated afterwards.

// External dependencies
use num_traits::Float;

/// A single observed pair `(x, t)` where `t = signal(x) + noise`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation<T> {
    /// Input drawn from the uniform source.
    pub x: T,
    /// Noisy target.
    pub t: T,
}

impl<T: Float> Observation<T> {
    /// Create a new observation.
    #[inline]
    pub fn new(x: T, t: T) -> Self {
        Self { x, t }
    }

    /// The `(-1, -1)` placeholder returned next to an exhaustion error by
    /// [`generate_with_sentinel`](crate::engine::stream::ObservationStream::generate_with_sentinel).
    ///
    /// It carries no data and must not be fed to a fit.
    #[inline]
    pub fn sentinel() -> Self {
        Self {
            x: -T::one(),
            t: -T::one(),
        }
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.t.is_finite()
    }
}

impl<T> From<(T, T)> for Observation<T> {
    fn from((x, t): (T, T)) -> Self {
        Self { x, t }
    }
}
