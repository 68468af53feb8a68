//! Uniform sources: the entropy root of the observation pipeline.
//!
//! ## Purpose
//!
//! This module defines the [`UniformSource`] trait, which yields successive
//! values in `[0, 1)`, together with a `rand`-backed source and two
//! deterministic sources for replaying recorded sequences.
//!
//! ## Design notes
//!
//! * **Injected**: Sources are passed into noise generators and streams; there
//!   is no global sampler.
//! * **Exhaustible**: The trait returns `Result` so that finite, recorded
//!   sequences can report exhaustion. The `rand`-backed source never does.
//!
//! ## Invariants
//!
//! * Every `Ok` value lies in `[0, 1)`.
//! * A finite source keeps returning `ExhaustedInput` once depleted.
//!
//! ## Non-goals
//!
//! * This module does not provide cryptographically secure randomness.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Internal dependencies
use crate::primitives::errors::PolyFitError;

// ============================================================================
// Trait
// ============================================================================

/// A producer of values drawn uniformly from `[0, 1)`.
pub trait UniformSource<T> {
    /// Draw the next value, or report that the source is exhausted.
    fn next_uniform(&mut self) -> Result<T, PolyFitError>;
}

impl<T, U: UniformSource<T> + ?Sized> UniformSource<T> for &mut U {
    #[inline]
    fn next_uniform(&mut self) -> Result<T, PolyFitError> {
        (**self).next_uniform()
    }
}

// ============================================================================
// Rng-backed source
// ============================================================================

/// Inexhaustible uniform source backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngUniform<R> {
    rng: R,
}

impl<R: Rng> RngUniform<R> {
    /// Wrap an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Consume the source and return the underlying generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngUniform<StdRng> {
    /// Reproducible source seeded from a `u64`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(feature = "std")]
impl RngUniform<rand::rngs::ThreadRng> {
    /// Source backed by the thread-local generator.
    pub fn thread_local() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<T, R> UniformSource<T> for RngUniform<R>
where
    T: Float,
    R: Rng,
    StandardUniform: Distribution<T>,
{
    #[inline]
    fn next_uniform(&mut self) -> Result<T, PolyFitError> {
        Ok(self.rng.random::<T>())
    }
}

// ============================================================================
// Deterministic sources
// ============================================================================

/// Replays a recorded sequence once, then reports exhaustion.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySource<T> {
    values: Vec<T>,
    position: usize,
}

impl<T: Float> ReplaySource<T> {
    /// Create a replay source. Every value must lie in `[0, 1)`.
    pub fn new(values: Vec<T>) -> Result<Self, PolyFitError> {
        validate_unit_interval(&values)?;
        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Number of values not yet replayed.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.position
    }

    /// Rewind to the first value.
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

impl<T: Float> UniformSource<T> for ReplaySource<T> {
    fn next_uniform(&mut self) -> Result<T, PolyFitError> {
        let value = *self
            .values
            .get(self.position)
            .ok_or(PolyFitError::ExhaustedInput)?;
        self.position += 1;
        Ok(value)
    }
}

/// Cycles through a fixed, non-empty sequence forever.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicSource<T> {
    values: Vec<T>,
    position: usize,
}

impl<T: Float> CyclicSource<T> {
    /// Create a cyclic source. The sequence must be non-empty and within `[0, 1)`.
    pub fn new(values: Vec<T>) -> Result<Self, PolyFitError> {
        if values.is_empty() {
            return Err(PolyFitError::ExhaustedInput);
        }
        validate_unit_interval(&values)?;
        Ok(Self {
            values,
            position: 0,
        })
    }
}

impl<T: Float> UniformSource<T> for CyclicSource<T> {
    fn next_uniform(&mut self) -> Result<T, PolyFitError> {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        Ok(value)
    }
}

fn validate_unit_interval<T: Float>(values: &[T]) -> Result<(), PolyFitError> {
    for (i, &v) in values.iter().enumerate() {
        if !(v >= T::zero() && v < T::one()) {
            return Err(PolyFitError::InvalidNumericValue(format!(
                "uniform[{}]={} (must be in [0, 1))",
                i,
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }
    }
    Ok(())
}
