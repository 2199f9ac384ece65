//! # tnorm
//!
//! Exact sampling from truncated multivariate normal distributions:
//! normal distributions conditioned on a convex region defined by linear
//! inequality constraints.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `tn-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use nalgebra::{DMatrix, DVector};
//! use tnorm::sampler::TruncatedNormalSampler;
//!
//! // N([1, 1], diag(4, 1)) restricted to x₀ − x₁ ≥ −2
//! let mu = DVector::from_vec(vec![1.0, 1.0]);
//! let cov = DMatrix::from_row_slice(2, 2, &[4.0, 0.0, 0.0, 1.0]);
//! let mut sampler = TruncatedNormalSampler::new(mu, cov, 42).unwrap();
//! sampler
//!     .add_linear_constraint(&DVector::from_vec(vec![1.0, -1.0]), -2.0)
//!     .unwrap();
//! let x = sampler.sample_with_burn_in(100).unwrap();
//! assert!(x[0] - x[1] >= -2.0 - 1e-9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use tn_core as core;

/// Numerical support: distribution functions, RNGs, matrix square root.
pub use tn_math as math;

/// The truncated normal sampler and its engine interface.
pub use tn_sampler as sampler;
