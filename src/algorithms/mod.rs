//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the algorithmic pieces of the pipeline:
//! - Box–Muller Gaussian noise
//! - Signal functions
//! - Normal-equation accumulation
//! - Normal-equation solvers (Cramer's rule, QR)
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian noise generation.
pub mod noise;

/// Signal functions.
pub mod signal;

/// Gram matrix and moment vector accumulation.
pub mod normal_equations;

/// Normal-equation solvers.
pub mod solver;
