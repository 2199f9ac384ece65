//! Capability interface for constrained standard-normal sampling engines.
//!
//! [`TruncatedNormalSampler`](crate::TruncatedNormalSampler) consumes its
//! engine exclusively through the [`SamplingEngine`] trait, so the sampler
//! wrapper can be exercised against a scripted stub independently of the
//! real constrained-sampling dynamics.

use nalgebra::DVector;
use tn_core::{Real, Result, Size};

/// A linear inequality `coeffᵗ·y + offset ≥ 0` in standard space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    /// Normal vector of the half-space boundary.
    pub coeff: DVector<Real>,
    /// Scalar offset.
    pub offset: Real,
}

impl LinearConstraint {
    /// Signed slack `coeffᵗ·y + offset` at `y`; non-negative exactly when
    /// the constraint is satisfied.
    pub fn slack(&self, y: &DVector<Real>) -> Real {
        self.coeff.dot(y) + self.offset
    }

    /// Whether `y` satisfies the constraint.
    pub fn is_satisfied(&self, y: &DVector<Real>) -> bool {
        self.slack(y) >= 0.0
    }
}

/// A Markov-chain sampler for the standard normal distribution restricted
/// by linear inequality constraints.
///
/// The engine owns its chain state and its constraint set. Constraints
/// accumulate and are never removed; each one applies to every transition
/// performed after its registration.
pub trait SamplingEngine {
    /// Dimension of the standard space the engine samples in.
    fn dimension(&self) -> Size;

    /// Set the chain's current position.
    ///
    /// The position must satisfy every constraint registered so far; the
    /// engine does not verify this.
    fn set_initial_value(&mut self, position: DVector<Real>) -> Result<()>;

    /// Register the constraint `coeffᵗ·y + offset ≥ 0`.
    fn add_linear_constraint(&mut self, coeff: DVector<Real>, offset: Real) -> Result<()>;

    /// Advance the chain by one transition and return the new position.
    fn sample_next(&mut self) -> Result<DVector<Real>>;
}
