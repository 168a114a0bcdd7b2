//! Seedable random source shared by every subsystem.
//!
//! The world owns exactly one [`SimRng`] and lends it out as `&mut`, so every draw is
//! serialized by the borrow checker. Evolutionary dynamics depend on the order and number of
//! draws, not on who makes them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random number generator handle for the simulation.
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: StdRng,
}

impl SimRng {
    /// Creates a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible generator from a 64-bit seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        self.inner.random::<f32>()
    }

    /// Uniform float between `lo` and `hi`.
    ///
    /// Degenerate (`lo == hi`) and reversed ranges are accepted: the result is
    /// `lo + (hi - lo) * u` with `u` uniform in `[0, 1)`.
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit()
    }

    /// Returns `true` with probability `chance`.
    pub fn chance(&mut self, chance: f32) -> bool {
        self.unit() < chance
    }

    /// Uniform index in `0..len`.
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }

    /// Uniform 16-bit value.
    pub fn bits16(&mut self) -> u16 {
        self.inner.random::<u16>()
    }

    /// Uniform byte.
    pub fn byte(&mut self) -> u8 {
        self.inner.random::<u8>()
    }

    /// Multiplicative-plus-additive perturbation used for weights, biases and traits:
    /// `value * U(1 - delta, 1 + delta) + U(-delta, delta)`.
    pub fn perturb(&mut self, value: f32, delta: f32) -> f32 {
        value * self.uniform(1.0 - delta, 1.0 + delta) + self.uniform(-delta, delta)
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
