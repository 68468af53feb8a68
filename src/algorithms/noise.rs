//! Gaussian noise by the Box–Muller transform.
//!
//! ## Purpose
//!
//! This module turns pairs of uniform draws into Normal(mean, variance)
//! samples. Each transform yields two independent normals; the first is
//! returned immediately and the second is cached for the next call.
//!
//! ## Design notes
//!
//! * **Explicit state**: The toggle and cached half live in [`BoxMullerState`],
//!   which can be inspected and reset.
//! * **Owned source**: Each generator owns its uniform source, so independent
//!   generators never share entropy or state.
//! * **Degenerate draws**: `u = 0` would give `ln(0) = -inf`. Such draws are
//!   discarded and `u` is resampled, at most `MAX_RESAMPLE_ATTEMPTS` times.
//!
//! ## Key concepts
//!
//! * **Fresh call**: draw `u`, `v`; `r = sqrt(-2 ln u)`; return
//!   `mean + sd * r * cos(2πv)` and cache `mean + sd * r * sin(2πv)`.
//! * **Cached call**: return the cached value and clear the cache.
//!
//! ## Invariants
//!
//! * The two halves of one pair are returned on consecutive calls, in order.
//! * No NaN or infinite sample is ever returned.
//!
//! ## Non-goals
//!
//! * This module does not synchronize access; callers need `&mut`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::{Float, FloatConst};
use tracing::{trace, warn};

// Internal dependencies
use crate::primitives::errors::PolyFitError;
use crate::primitives::uniform::UniformSource;

/// Maximum consecutive degenerate `u` draws before giving up.
pub const MAX_RESAMPLE_ATTEMPTS: usize = 64;

// ============================================================================
// Noise Source Trait
// ============================================================================

/// Anything that yields additive noise samples.
pub trait NoiseSource<T> {
    /// Produce the next noise sample.
    fn next_noise(&mut self) -> Result<T, PolyFitError>;
}

impl<T, F: FnMut() -> T> NoiseSource<T> for F {
    #[inline]
    fn next_noise(&mut self) -> Result<T, PolyFitError> {
        Ok(self())
    }
}

/// Noise source that always returns zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoNoise;

impl<T: Float> NoiseSource<T> for NoNoise {
    #[inline]
    fn next_noise(&mut self) -> Result<T, PolyFitError> {
        Ok(T::zero())
    }
}

// ============================================================================
// Box–Muller State
// ============================================================================

/// Toggle state of a Box–Muller generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMullerState<T> {
    /// Second half of the last generated pair.
    pub cached: T,
    /// Whether `cached` is pending.
    pub has_cached: bool,
}

impl<T: Float> Default for BoxMullerState<T> {
    fn default() -> Self {
        Self {
            cached: T::zero(),
            has_cached: false,
        }
    }
}

// ============================================================================
// Box–Muller Generator
// ============================================================================

/// Stateful Normal(mean, variance) generator.
#[derive(Debug, Clone)]
pub struct BoxMuller<T, U> {
    mean: T,
    std_dev: T,
    source: U,
    state: BoxMullerState<T>,
}

impl<T: Float + FloatConst, U: UniformSource<T>> BoxMuller<T, U> {
    /// Create a generator for Normal(`mean`, `variance`).
    pub fn new(mean: T, variance: T, source: U) -> Result<Self, PolyFitError> {
        validate_noise(mean, variance)?;
        Ok(Self {
            mean,
            std_dev: variance.sqrt(),
            source,
            state: BoxMullerState::default(),
        })
    }

    /// Create a generator parameterized by standard deviation instead of variance.
    pub fn with_std_dev(mean: T, std_dev: T, source: U) -> Result<Self, PolyFitError> {
        if !std_dev.is_finite() || std_dev < T::zero() {
            return Err(PolyFitError::InvalidNoiseParameter {
                mean: mean.to_f64().unwrap_or(f64::NAN),
                variance: (std_dev * std_dev).to_f64().unwrap_or(f64::NAN),
            });
        }
        validate_noise(mean, std_dev * std_dev)?;
        Ok(Self {
            mean,
            std_dev,
            source,
            state: BoxMullerState::default(),
        })
    }

    /// Target mean.
    pub fn mean(&self) -> T {
        self.mean
    }

    /// Target standard deviation.
    pub fn std_dev(&self) -> T {
        self.std_dev
    }

    /// Target variance.
    pub fn variance(&self) -> T {
        self.std_dev * self.std_dev
    }

    /// Current toggle state.
    pub fn state(&self) -> BoxMullerState<T> {
        self.state
    }

    /// Discard any cached half-pair so the next call computes a fresh pair.
    pub fn reset(&mut self) {
        self.state = BoxMullerState::default();
    }

    /// Consume the generator and return its uniform source.
    pub fn into_source(self) -> U {
        self.source
    }

    /// Draw the next Normal(mean, variance) sample.
    pub fn sample(&mut self) -> Result<T, PolyFitError> {
        if self.state.has_cached {
            self.state.has_cached = false;
            return Ok(self.state.cached);
        }

        let u = self.draw_radial_uniform()?;
        let v = self.source.next_uniform()?;

        let two = T::one() + T::one();
        let r = (-two * u.ln()).sqrt();
        let theta = T::TAU() * v;

        let first = self.mean + self.std_dev * r * theta.cos();
        let second = self.mean + self.std_dev * r * theta.sin();

        if !first.is_finite() || !second.is_finite() {
            return Err(PolyFitError::InvalidNumericValue(format!(
                "box-muller pair ({}, {})",
                first.to_f64().unwrap_or(f64::NAN),
                second.to_f64().unwrap_or(f64::NAN)
            )));
        }

        trace!("generated fresh box-muller pair");
        self.state = BoxMullerState {
            cached: second,
            has_cached: true,
        };
        Ok(first)
    }

    /// Draw `u` in `(0, 1)`, resampling zero or non-finite draws.
    fn draw_radial_uniform(&mut self) -> Result<T, PolyFitError> {
        for attempt in 0..MAX_RESAMPLE_ATTEMPTS {
            let u = self.source.next_uniform()?;
            if u > T::zero() && u.is_finite() {
                return Ok(u);
            }
            warn!(attempt, "degenerate uniform draw for box-muller radius, resampling");
        }
        Err(PolyFitError::InvalidNumericValue(format!(
            "{} consecutive degenerate uniform draws",
            MAX_RESAMPLE_ATTEMPTS
        )))
    }
}

impl<T: Float + FloatConst, U: UniformSource<T>> NoiseSource<T> for BoxMuller<T, U> {
    #[inline]
    fn next_noise(&mut self) -> Result<T, PolyFitError> {
        self.sample()
    }
}

fn validate_noise<T: Float>(mean: T, variance: T) -> Result<(), PolyFitError> {
    if !mean.is_finite() || !variance.is_finite() || variance < T::zero() {
        return Err(PolyFitError::InvalidNoiseParameter {
            mean: mean.to_f64().unwrap_or(f64::NAN),
            variance: variance.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
