//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates one evaluation:
//! - Structural validation of the call
//! - Execution of every statistic with per-statistic error isolation
//! - The ordered result type shared by all output formats
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Formats
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Structural validation.
pub mod validator;

/// Statistic execution loop.
pub mod executor;

/// Result types.
pub mod output;
