//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the fitter:
//! - Power-basis polynomial evaluation
//! - Determinants and singularity checks
//! - The nalgebra bridge for QR solves
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Power-basis polynomial helpers.
pub mod polynomial;

/// Determinants by Gaussian elimination.
pub mod determinant;

/// nalgebra backend.
pub mod linalg;
