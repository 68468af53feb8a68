//! Observation streams.
//!
//! ## Purpose
//!
//! This module composes a uniform source, a signal function and a noise
//! source into a pull-based producer of [`Observation`]s:
//!
//! ```text
//! x = source()
//! t = signal(x) + noise()
//! ```
//!
//! ## Design notes
//!
//! * **Pure composition**: The stream holds no state beyond its three parts.
//!   Draws are never cached or reordered.
//! * **Discriminated results**: Exhaustion is an `Err`, not a sentinel value.
//!   [`ObservationStream::generate_with_sentinel`] exists for callers that
//!   expect the `(value, error)` shape.
//! * **Iterator**: The stream is an iterator that ends when the source is
//!   exhausted and yields any other failure as an `Err` item.
//!
//! ## Invariants
//!
//! * Exactly one uniform draw for `x` per observation.
//! * On exhaustion no noise is drawn.

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::noise::NoiseSource;
use crate::algorithms::signal::SignalFunction;
use crate::primitives::errors::PolyFitError;
use crate::primitives::observation::Observation;
use crate::primitives::uniform::UniformSource;

// ============================================================================
// Observation Source Trait
// ============================================================================

/// Anything a fit can pull observations from.
pub trait ObservationSource<T> {
    /// Produce the next observation.
    fn generate(&mut self) -> Result<Observation<T>, PolyFitError>;
}

impl<T, G: ObservationSource<T> + ?Sized> ObservationSource<T> for &mut G {
    #[inline]
    fn generate(&mut self) -> Result<Observation<T>, PolyFitError> {
        (**self).generate()
    }
}

// ============================================================================
// Observation Stream
// ============================================================================

/// Uniform source, signal and noise composed into observed pairs.
#[derive(Debug, Clone)]
pub struct ObservationStream<T, U, S, N> {
    source: U,
    signal: S,
    noise: N,
    _marker: PhantomData<fn() -> T>,
}

impl<T, U, S, N> ObservationStream<T, U, S, N>
where
    T: Float,
    U: UniformSource<T>,
    S: SignalFunction<T>,
    N: NoiseSource<T>,
{
    /// Wire the three components together.
    pub fn new(source: U, signal: S, noise: N) -> Self {
        Self {
            source,
            signal,
            noise,
            _marker: PhantomData,
        }
    }

    /// Pull one observation.
    pub fn generate(&mut self) -> Result<Observation<T>, PolyFitError> {
        let x = self.source.next_uniform()?;
        let t = self.signal.eval(x) + self.noise.next_noise()?;
        Ok(Observation::new(x, t))
    }

    /// Pull one observation, returning [`Observation::sentinel`] alongside any error.
    pub fn generate_with_sentinel(&mut self) -> (Observation<T>, Option<PolyFitError>) {
        match self.generate() {
            Ok(observation) => (observation, None),
            Err(err) => (Observation::sentinel(), Some(err)),
        }
    }

    /// The signal function.
    pub fn signal(&self) -> &S {
        &self.signal
    }

    /// The noise source.
    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Mutable access to the noise source (e.g. to reset it).
    pub fn noise_mut(&mut self) -> &mut N {
        &mut self.noise
    }

    /// Take the stream apart.
    pub fn into_parts(self) -> (U, S, N) {
        (self.source, self.signal, self.noise)
    }
}

impl<T, U, S, N> ObservationSource<T> for ObservationStream<T, U, S, N>
where
    T: Float,
    U: UniformSource<T>,
    S: SignalFunction<T>,
    N: NoiseSource<T>,
{
    #[inline]
    fn generate(&mut self) -> Result<Observation<T>, PolyFitError> {
        ObservationStream::generate(self)
    }
}

impl<T, U, S, N> Iterator for ObservationStream<T, U, S, N>
where
    T: Float,
    U: UniformSource<T>,
    S: SignalFunction<T>,
    N: NoiseSource<T>,
{
    type Item = Result<Observation<T>, PolyFitError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.generate() {
            Err(PolyFitError::ExhaustedInput) => None,
            other => Some(other),
        }
    }
}
