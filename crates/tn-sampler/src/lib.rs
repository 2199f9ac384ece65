//! # tn-sampler
//!
//! Exact sampling from truncated multivariate normal distributions:
//! normal distributions `N(mu, cov)` restricted to a convex region
//! defined by linear inequality constraints `coeffᵗ·x ≥ rhs`.
//!
//! [`TruncatedNormalSampler`] maps the constrained problem onto standard
//! space through the symmetric square root of the covariance matrix and
//! delegates the actual draws to a [`SamplingEngine`]; the default engine
//! is [`ExactHmcEngine`], an exact Hamiltonian Monte Carlo sampler for
//! the linearly constrained standard normal.
//!
//! ## Quick start
//!
//! ```rust
//! use nalgebra::{DMatrix, DVector};
//! use tn_sampler::TruncatedNormalSampler;
//!
//! // N(0, I₂) restricted to x₀ + x₁ ≥ −1
//! let mu = DVector::zeros(2);
//! let cov = DMatrix::identity(2, 2);
//! let mut sampler = TruncatedNormalSampler::new(mu, cov, 42).unwrap();
//! sampler
//!     .add_linear_constraint(&DVector::from_vec(vec![1.0, 1.0]), -1.0)
//!     .unwrap();
//! let x = sampler.sample_with_burn_in(100).unwrap();
//! assert!(x[0] + x[1] >= -1.0 - 1e-9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The engine capability interface and the standard-space constraint type.
pub mod engine;

/// The exact-HMC engine for the constrained standard normal.
pub mod hmc;

/// The truncated normal sampler wrapper.
pub mod truncated_normal;

pub use engine::{LinearConstraint, SamplingEngine};
pub use hmc::ExactHmcEngine;
pub use truncated_normal::TruncatedNormalSampler;
