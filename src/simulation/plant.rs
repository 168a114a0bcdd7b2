//! Plants: stationary producers that creatures graze on.

use ndarray::Array1;
use serde::Serialize;

use super::body::Body;
use super::genetics::PRODUCER_GENE;
use super::geometric_utils::vec2;
use super::random::SimRng;

/// A plant grows while it has room and shrinks when eaten.
///
/// Plants spawn with zero radius. A plant whose disc overlaps another plant stops growing,
/// and a blocked plant that never got off the ground withers.
#[derive(Debug, Clone, Serialize)]
pub struct Plant {
    /// Shared thing state. The gene is always [`PRODUCER_GENE`].
    pub body: Body,
}

impl Plant {
    /// Creates a zero-sized plant at `pos`.
    pub fn new(pos: Array1<f32>) -> Self {
        Self::with_size(pos, 0.0)
    }

    /// Creates a plant of the given radius at `pos`.
    pub fn with_size(pos: Array1<f32>, size: f32) -> Self {
        assert!(size >= 0.0, "plant size must be non-negative");
        Self {
            body: Body::new(pos, size, PRODUCER_GENE),
        }
    }

    /// Creates a zero-sized plant at a uniformly random spot of the box.
    pub fn new_random(box_width: f32, box_height: f32, rng: &mut SimRng) -> Self {
        let x = rng.uniform(0.0, box_width);
        let y = rng.uniform(0.0, box_height);
        Self::new(vec2(x, y))
    }

    /// Advances the plant by `dt`.
    ///
    /// # Arguments
    ///
    /// * `dt` - Simulated seconds
    /// * `growth_rate` - Radius gained per simulated second
    /// * `blocked` - Whether the plant currently overlaps another live plant
    ///
    /// # Returns
    ///
    /// `true` if the plant withered during this tick.
    pub fn tick(&mut self, dt: f32, growth_rate: f32, blocked: bool) -> bool {
        if blocked {
            if self.body.size == 0.0 {
                self.body.alive = false;
                return true;
            }
            return false;
        }
        self.body.size += growth_rate * dt;
        false
    }

    /// Removes up to `amount` of radius, killing the plant once nothing is left.
    pub fn shrink(&mut self, amount: f32) {
        self.body.size = (self.body.size - amount).max(0.0);
        if self.body.size <= 0.0 {
            self.body.alive = false;
        }
    }
}
