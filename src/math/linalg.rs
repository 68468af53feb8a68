//! Linear algebra backend for the stable normal-equation solver.
//!
//! ## Purpose
//!
//! This module bridges generic `Float` code to nalgebra so the fitter can
//! solve the normal equations with a Householder QR decomposition instead of
//! determinant ratios.
//!
//! ## Design notes
//!
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//! * Input matrices are row-major; the Gram matrix is symmetric, so loading it
//!   column-major yields the same matrix.
//! * Singularity is decided by the caller before solving; a failed QR solve is
//!   reported as `None`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the symmetric system `G * w = c` by QR decomposition.
    fn solve_qr(gram: &[Self], moments: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_qr(gram: &[Self], moments: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_qr_f64(gram, moments, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_qr(gram: &[Self], moments: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_qr_f32(gram, moments, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve `G * w = c` using f64 precision.
    pub fn solve_qr_f64(gram: &[f64], moments: &[f64], n: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n, n, gram);
        let rhs = DVector::from_column_slice(moments);

        matrix
            .qr()
            .solve(&rhs)
            .map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Solve `G * w = c` using f32 precision.
    pub fn solve_qr_f32(gram: &[f32], moments: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n, n, gram);
        let rhs = DVector::from_column_slice(moments);

        matrix
            .qr()
            .solve(&rhs)
            .map(|s: DVector<f32>| s.as_slice().to_vec())
    }
}
