//! # tn-math
//!
//! Numerical support for tnorm: floating-point comparison helpers,
//! standard normal distribution functions, seeded random number
//! generators, the symmetric matrix square root, and a statistics
//! accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Standard normal pdf, cdf, and inverse cdf.
pub mod distributions;

/// Symmetric eigen-decomposition and the symmetric PSD square root.
pub mod matrix_utilities;

/// Seeded random number generators.
pub mod random_numbers;

/// Incremental statistics accumulator.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use matrix_utilities::{symmetric_eigen, symmetric_sqrt};
pub use random_numbers::{GaussianRng, MersenneTwisterUniformRng};
pub use statistics::Statistics;
