//! Seeded random number generators.
//!
//! All randomness in the library flows from a Mersenne Twister MT19937-64
//! seeded once at construction, so a fixed seed and call history reproduce
//! a draw sequence exactly.

use nalgebra::DVector;
use rand_mt::Mt19937GenRand64;
use tn_core::{Real, Seed, Size};

use crate::distributions::normal_cdf_inverse;

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: Seed) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        let u: u64 = self.rng.next_u64();
        u as f64 / (u64::MAX as f64 + 1.0)
    }
}

/// A standard-normal random number generator.
///
/// Transforms uniform deviates from a seeded [`MersenneTwisterUniformRng`]
/// through the inverse normal CDF.
pub struct GaussianRng {
    inner: MersenneTwisterUniformRng,
}

impl GaussianRng {
    /// Create a new generator backed by a Mersenne Twister with the given
    /// seed.
    pub fn new(seed: Seed) -> Self {
        Self {
            inner: MersenneTwisterUniformRng::new(seed),
        }
    }

    /// Generate the next standard-normal deviate.
    pub fn next_real(&mut self) -> Real {
        // Avoid exact 0 which would map to −∞
        let u = loop {
            let u = self.inner.next_real();
            if u > 0.0 {
                break u;
            }
        };
        normal_cdf_inverse(u)
    }

    /// Generate a vector of `n` independent standard-normal deviates.
    pub fn next_vector(&mut self, n: Size) -> DVector<Real> {
        DVector::from_fn(n, |_, _| self.next_real())
    }
}
