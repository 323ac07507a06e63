//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer maps statistics onto matrix lanes:
//! - The closed set of statistics and their per-lane reduction
//! - Axis selection and reduction of a whole matrix
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Formats
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Statistic enumeration and per-lane dispatch.
pub mod statistic;

/// Axis selection and matrix reduction.
pub mod reduction;
