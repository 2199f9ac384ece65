//! Sampler for multivariate normal distributions truncated by linear
//! inequality constraints.
//!
//! The engine can only sample a standard normal, so the sampler performs
//! a change of basis: instead of drawing `x` from `N(mu, cov)` restricted
//! to `{x : coeffᵢᵗ·x ≥ rhsᵢ}`, it draws `y` from `N(0, I)` under the
//! translated constraints and maps
//!
//! ```text
//! x = cov_sqrt·y + mu
//! ```
//!
//! where `cov_sqrt` is the symmetric PSD square root of `cov`. The same
//! substitution rewrites each user-space constraint `coeffᵗ·x ≥ rhs` as
//! `(cov_sqrt·coeff)ᵗ·y ≥ rhs − coeffᵗ·mu` before it is handed to the
//! engine.

use nalgebra::{DMatrix, DVector};
use tn_core::errors::Error;
use tn_core::{Real, Result, Seed, Size};
use tn_math::matrix_utilities::symmetric_sqrt;

use crate::engine::SamplingEngine;
use crate::hmc::ExactHmcEngine;

/// Samples from a normal distribution `N(mu, cov)` truncated by linear
/// constraints of the form `coeffᵗ·x ≥ rhs`.
///
/// The dimension of the space is inferred from the size of `mu`.
///
/// `mu` must strictly satisfy every constraint that is later added; this
/// is a precondition and is not checked. The chain starts at `mu` (the
/// origin of the standard space) and each draw advances it by one engine
/// transition, so early draws depend on the start;
/// [`sample_with_burn_in`](Self::sample_with_burn_in) discards that
/// dependence.
#[derive(Debug)]
pub struct TruncatedNormalSampler<E = ExactHmcEngine> {
    mu: DVector<Real>,
    cov_sqrt: DMatrix<Real>,
    engine: E,
}

impl TruncatedNormalSampler<ExactHmcEngine> {
    /// Create a sampler for `N(mu, cov)` backed by the exact-HMC engine,
    /// seeding its generator with `seed`.
    ///
    /// `cov` must be symmetric positive-semidefinite; this is not checked,
    /// and an indefinite input yields meaningless output. Shape mismatches
    /// are reported as errors.
    pub fn new(mu: DVector<Real>, cov: DMatrix<Real>, seed: Seed) -> Result<Self> {
        let engine = ExactHmcEngine::new(mu.len(), seed);
        Self::with_engine(mu, cov, engine)
    }
}

impl<E: SamplingEngine> TruncatedNormalSampler<E> {
    /// Create a sampler for `N(mu, cov)` on top of a caller-supplied
    /// engine, which must have been constructed for the same dimension.
    ///
    /// Computes the symmetric square root of `cov` once and moves the
    /// engine's chain to the origin of the standard space (the image of
    /// `mu`, a valid starting point by the strict-feasibility
    /// precondition).
    pub fn with_engine(mu: DVector<Real>, cov: DMatrix<Real>, mut engine: E) -> Result<Self> {
        Error::check_dimension(mu.len(), cov.nrows())?;
        Error::check_dimension(mu.len(), cov.ncols())?;
        Error::check_dimension(mu.len(), engine.dimension())?;
        let cov_sqrt = symmetric_sqrt(&cov)?;
        engine.set_initial_value(DVector::zeros(mu.len()))?;
        Ok(Self {
            mu,
            cov_sqrt,
            engine,
        })
    }

    /// Dimension of the sampled space.
    pub fn dimension(&self) -> Size {
        self.mu.len()
    }

    /// The mean vector.
    pub fn mean(&self) -> &DVector<Real> {
        &self.mu
    }

    /// The symmetric square root of the covariance matrix.
    pub fn covariance_sqrt(&self) -> &DMatrix<Real> {
        &self.cov_sqrt
    }

    /// The underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Add the constraint `coeffᵗ·x ≥ rhs`.
    ///
    /// The constraint is translated into standard space and registered
    /// with the engine; it applies to every subsequent draw. No check is
    /// made that the constraint is jointly satisfiable with the ones
    /// already registered; an inconsistent set surfaces later as an
    /// engine failure.
    pub fn add_linear_constraint(&mut self, coeff: &DVector<Real>, rhs: Real) -> Result<()> {
        Error::check_dimension(self.dimension(), coeff.len())?;
        // x = cov_sqrt·y + mu turns coeffᵗ·x ≥ rhs into
        // (cov_sqrt·coeff)ᵗ·y ≥ rhs − coeffᵗ·mu
        let translated = &self.cov_sqrt * coeff;
        let rhs = rhs - coeff.dot(&self.mu);
        // the engine expects constraints in the form aᵗ·y + b ≥ 0
        self.engine.add_linear_constraint(translated, -rhs)
    }

    /// Draw one sample.
    ///
    /// Advances the engine's chain by a single transition and maps the
    /// standard-space position back to user space. Engine failures
    /// propagate unchanged.
    pub fn sample(&mut self) -> Result<DVector<Real>> {
        let y = self.engine.sample_next()?;
        Ok(&self.cov_sqrt * y + &self.mu)
    }

    /// Discard `burn_in` transitions, then draw one sample.
    ///
    /// Equivalent to `burn_in + 1` calls to [`sample`](Self::sample)
    /// keeping only the last result. `burn_in = 0` is exactly
    /// [`sample`](Self::sample).
    pub fn sample_with_burn_in(&mut self, burn_in: Size) -> Result<DVector<Real>> {
        for _ in 0..burn_in {
            self.engine.sample_next()?;
        }
        self.sample()
    }
}
