//! Deterministic simulation-level RNG wrapper.
//!
//! The simulator draws from exactly one generator, sequentially: a shuffle
//! at grid initialisation, then one uniform destination pick per
//! relocation.  Seeding that generator from `SimConfig::seed` makes every
//! run reproducible.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Simulation-level RNG.
///
/// Single-threaded and not `Clone`: one stream per simulation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
