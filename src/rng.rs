//! The randomness provider, a single seeded stream per run.
//!
//! Every stochastic decision in the crate funnels through a [SeededRng], so a
//! run is uniquely determined by `(seed, configuration, execution traces)`.
//! The generator is an explicit value handed to the search algorithm at
//! construction, there is no global or thread-local fallback.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug)]
pub struct SeededRng {
    rng: SmallRng,
    seed: u64,
}

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw a seed from the OS entropy pool, but keep it observable so the
    /// run can still be reproduced afterwards.
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen::<u64>();
        Self::from_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_double(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform draw in `[lo, hi)`.
    pub fn next_int(&mut self, lo: i64, hi: i64) -> i64 {
        self.rng.gen_range(lo..hi)
    }

    /// Uniform index draw in `[0, size)`.
    pub fn next_index(&mut self, size: usize) -> usize {
        self.rng.gen_range(0..size)
    }

    pub fn next_bool(&mut self) -> bool {
        self.rng.gen::<bool>()
    }

    /// Bernoulli trial with the given success probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
