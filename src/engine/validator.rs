//! Input validation for fit configuration and observations.
//!
//! ## Purpose
//!
//! This module provides validation functions for fitter configuration
//! parameters and for each observation folded into a fit.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the fit itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyFitError;
use crate::primitives::observation::Observation;

/// Highest polynomial order accepted by the fitter.
pub const MAX_ORDER: usize = 16;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit configuration and observations.
pub struct Validator;

impl Validator {
    /// Validate the polynomial order (number of coefficients).
    pub fn validate_order(order: usize) -> Result<(), PolyFitError> {
        if order == 0 || order > MAX_ORDER {
            return Err(PolyFitError::InvalidOrder(order));
        }
        Ok(())
    }

    /// Validate the number of observations a fit draws.
    pub fn validate_sample_count(samples: usize) -> Result<(), PolyFitError> {
        if samples == 0 {
            return Err(PolyFitError::InvalidSampleCount(samples));
        }
        Ok(())
    }

    /// Validate the relative singularity tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), PolyFitError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(PolyFitError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set twice.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PolyFitError> {
        if let Some(parameter) = duplicate_param {
            return Err(PolyFitError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    /// Validate that the `index`-th observation of a fit is finite.
    pub fn validate_observation<T: Float>(
        observation: &Observation<T>,
        index: usize,
    ) -> Result<(), PolyFitError> {
        if !observation.is_finite() {
            return Err(PolyFitError::InvalidNumericValue(format!(
                "observation[{}]=({}, {})",
                index,
                observation.x.to_f64().unwrap_or(f64::NAN),
                observation.t.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }
}
