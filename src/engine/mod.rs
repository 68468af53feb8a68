//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer wires the algorithms into runnable pieces:
//! - Observation streams composing source, signal and noise
//! - Fit execution (accumulate, then solve)
//! - Validation of configuration and observations
//! - Output types
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Observation streams.
pub mod stream;

/// Fit execution.
pub mod executor;

/// Configuration and observation validation.
pub mod validator;

/// Fitted coefficient vector.
pub mod output;
