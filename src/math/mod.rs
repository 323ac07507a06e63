//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical reductions over a single lane
//! (a slice of values):
//! - Moments (sum, mean, variance, standard deviation)
//! - Order statistics (max, min, peak-to-peak, median)
//! - Mode
//!
//! These are reusable building blocks with no knowledge of axes or output formats.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sum, mean, population variance and standard deviation.
pub mod moments;

/// Maximum, minimum, peak-to-peak and median.
pub mod order;

/// Most frequent value.
pub mod mode;
