//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit measurements:
//! - Fit diagnostics against observations or the true signal
//! - Sample statistics for validating noise generators
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit diagnostics.
pub mod diagnostics;

/// Sample statistics.
pub mod statistics;
