//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures every higher layer builds on:
//! - Error types shared across the crate
//! - Input elements and one-level flattening
//! - The row-major matrix and its shape
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for validation and per-statistic failures.
pub mod errors;

/// Input elements, flattening and JSON conversion.
pub mod input;

/// Shape and row-major matrix storage.
pub mod matrix;
