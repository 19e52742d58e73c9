//! Sources of random perturbation for the simulated provider.
//!
//! Generation never calls a global RNG directly. It draws from a `NoiseSource`
//! so callers can seed it for reproducible output or swap in `MidpointNoise`
//! to remove variation entirely.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use tracing::debug;

/// A uniform random source shared by concurrent generator calls.
pub trait NoiseSource: Send + Sync {
    /// Uniform sample in `[low, high)`. Returns `low` for an empty interval.
    fn sample(&self, low: f64, high: f64) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize;
}

/// Picks one element of a non-empty slice using `noise`.
pub fn pick<T: Copy>(noise: &dyn NoiseSource, items: &[T]) -> T {
    items[noise.index(items.len()).min(items.len() - 1)]
}

/// `StdRng`-backed noise, seeded explicitly or from OS entropy.
pub struct RandomNoise {
    rng: Mutex<StdRng>,
}

impl RandomNoise {
    pub fn from_entropy() -> Self {
        debug!("Creating entropy-seeded noise source");
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        debug!("Creating noise source with seed {}", seed);
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic while holding the lock cannot leave the RNG in a bad state.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl NoiseSource for RandomNoise {
    fn sample(&self, low: f64, high: f64) -> f64 {
        if !(low < high) {
            return low;
        }
        self.with_rng(|rng| rng.gen_range(low..high))
    }

    fn index(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.with_rng(|rng| rng.gen_range(0..len))
    }
}

/// Zero-variation noise: the centre of every interval and the first index.
///
/// Symmetric perturbations such as `[-20, 20)` therefore contribute exactly 0.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MidpointNoise;

#[cfg(test)]
impl NoiseSource for MidpointNoise {
    fn sample(&self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }

    fn index(&self, _len: usize) -> usize {
        0
    }
}
