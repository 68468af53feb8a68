//! Error types for observation synthesis and polynomial fitting.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while drawing
//! observations from a stream or fitting a polynomial to them, including
//! source exhaustion, degenerate systems, and parameter validation.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., observations drawn vs. needed).
//! * **Deferred**: Builder errors are reported when `.build()` is called.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Stream errors**: An exhausted uniform source ends a stream.
//! 2. **Fit errors**: Too few observations, or a numerically singular Gram matrix.
//! 3. **Numeric errors**: Non-finite observations or degenerate noise draws.
//! 4. **Parameter validation**: Invalid order, sample count, noise or tolerance.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not retry or recover from failures.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for observation streams and polynomial fits.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyFitError {
    /// The uniform source has no more values to give.
    ExhaustedInput,

    /// The stream ended before the fit drew the requested number of observations.
    InsufficientData {
        /// Number of observations actually drawn.
        got: usize,
        /// Number of observations the fit was configured for.
        needed: usize,
    },

    /// The Gram matrix is numerically singular.
    SingularSystem {
        /// Polynomial order (number of coefficients).
        order: usize,
        /// Number of observations accumulated into the matrix.
        samples: usize,
    },

    /// An observation or noise draw produced NaN or an infinite value.
    InvalidNumericValue(String),

    /// Polynomial order must be in `[1, 16]`.
    InvalidOrder(usize),

    /// A fit needs at least one observation.
    InvalidSampleCount(usize),

    /// Noise mean must be finite and variance non-negative and finite.
    InvalidNoiseParameter {
        /// The mean provided.
        mean: f64,
        /// The variance provided.
        variance: f64,
    },

    /// Singularity tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PolyFitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ExhaustedInput => write!(f, "Uniform source exhausted"),
            Self::InsufficientData { got, needed } => {
                write!(
                    f,
                    "Insufficient data: stream produced {got} observations, fit needs {needed}"
                )
            }
            Self::SingularSystem { order, samples } => {
                write!(
                    f,
                    "Singular system: Gram matrix of order {order} over {samples} samples is numerically singular"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidOrder(order) => {
                write!(f, "Invalid order: {order} (must be in [1, 16])")
            }
            Self::InvalidSampleCount(n) => {
                write!(f, "Invalid sample count: {n} (must be at least 1)")
            }
            Self::InvalidNoiseParameter { mean, variance } => {
                write!(
                    f,
                    "Invalid noise parameters: mean {mean}, variance {variance} (mean must be finite, variance >= 0 and finite)"
                )
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PolyFitError {}
