//! Random-number collaborator used by [`crate::Network`].
//!
//! The network only relies on three statistical primitives: standard normal
//! draws for node values, Poisson draws for degree targets, and uniform
//! permutations for candidate ordering. [`RandomSource`] captures that
//! contract so tests can script the draws, while [`SeededRng`] provides the
//! production implementation on top of `rand`'s `SmallRng`.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use rand_distr::{Poisson, StandardNormal};

use crate::error::{NetworkError, Result};

/// Seed used when no explicit seed is configured.
pub const DEFAULT_RNG_SEED: u64 = 0x0E91_DE41;

/// Source of the random draws consumed by [`crate::Network`].
///
/// Implementations own their state exclusively; the network never shares a
/// source between instances.
pub trait RandomSource {
    /// Overwrites every element of `out` with an independent Normal(0, 1) draw.
    fn fill_normal(&mut self, out: &mut [f64]);

    /// Overwrites every element of `out` with an independent Poisson draw of
    /// mean `mean`.
    ///
    /// Callers guarantee `mean` is finite and non-negative. A mean of zero
    /// yields zeros.
    ///
    /// # Errors
    /// Returns [`NetworkError::Distribution`] when the distribution cannot be
    /// constructed for `mean`.
    fn fill_poisson(&mut self, out: &mut [u64], mean: f64) -> Result<()>;

    /// Applies a uniformly random permutation to `items` in place.
    fn shuffle(&mut self, items: &mut [usize]);
}

/// [`RandomSource`] backed by a seeded [`SmallRng`].
///
/// # Examples
/// ```
/// use epinet_core::{RandomSource, SeededRng};
///
/// let mut left = SeededRng::new(7);
/// let mut right = SeededRng::new(7);
/// let mut a = [0.0; 4];
/// let mut b = [0.0; 4];
/// left.fill_normal(&mut a);
/// right.fill_normal(&mut b);
/// assert_eq!(a, b);
/// assert_eq!(left.seed(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct SeededRng {
    seed: u64,
    rng: SmallRng,
}

impl SeededRng {
    /// Creates a generator whose stream is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns the seed the generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(DEFAULT_RNG_SEED)
    }
}

impl RandomSource for SeededRng {
    fn fill_normal(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.rng.sample(StandardNormal);
        }
    }

    fn fill_poisson(&mut self, out: &mut [u64], mean: f64) -> Result<()> {
        debug_assert!(
            mean.is_finite() && mean >= 0.0,
            "callers validate the Poisson mean"
        );
        if mean == 0.0 {
            out.fill(0);
            return Ok(());
        }
        let poisson = Poisson::new(mean).map_err(|err| NetworkError::Distribution {
            reason: err.to_string(),
        })?;
        for slot in out.iter_mut() {
            let draw: f64 = self.rng.sample(&poisson);
            // Poisson draws are non-negative integers encoded as floats.
            *slot = draw as u64;
        }
        Ok(())
    }

    fn shuffle(&mut self, items: &mut [usize]) {
        items.shuffle(&mut self.rng);
    }
}
