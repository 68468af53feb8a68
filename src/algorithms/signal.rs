//! Signal functions: the deterministic "true" relationship to be learned.
//!
//! Any `Fn(T) -> T` is a signal. [`Sinusoid`] and [`PolynomialSignal`] cover
//! the two shapes used in experiments: a smooth non-polynomial target, and a
//! known polynomial whose coefficients a fit should recover.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{Float, FloatConst};

// Internal dependencies
use crate::math::polynomial;

/// A pure, deterministic function of the input.
pub trait SignalFunction<T> {
    /// Evaluate the signal at `x`.
    fn eval(&self, x: T) -> T;
}

impl<T, F: Fn(T) -> T> SignalFunction<T> for F {
    #[inline]
    fn eval(&self, x: T) -> T {
        self(x)
    }
}

/// `amplitude · sin(2π · frequency · x + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sinusoid<T> {
    /// Peak amplitude.
    pub amplitude: T,
    /// Cycles per unit of `x`.
    pub frequency: T,
    /// Phase offset in radians.
    pub phase: T,
}

impl<T: Float> Sinusoid<T> {
    /// Construct a sinusoid.
    pub fn new(amplitude: T, frequency: T, phase: T) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }
}

impl<T: Float> Default for Sinusoid<T> {
    /// One full period of `sin(2πx)` over `[0, 1)`.
    fn default() -> Self {
        Self::new(T::one(), T::one(), T::zero())
    }
}

impl<T: Float + FloatConst> SignalFunction<T> for Sinusoid<T> {
    #[inline]
    fn eval(&self, x: T) -> T {
        self.amplitude * (T::TAU() * self.frequency * x + self.phase).sin()
    }
}

/// A polynomial with known coefficients `w_0 + w_1 x + ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialSignal<T> {
    coefficients: Vec<T>,
}

impl<T: Float> PolynomialSignal<T> {
    /// Construct from coefficients in ascending power order.
    pub fn new(coefficients: Vec<T>) -> Self {
        Self { coefficients }
    }

    /// Coefficients in ascending power order.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }
}

impl<T: Float> SignalFunction<T> for PolynomialSignal<T> {
    #[inline]
    fn eval(&self, x: T) -> T {
        polynomial::evaluate(&self.coefficients, x)
    }
}
