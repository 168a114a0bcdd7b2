//! Activation function catalog.

use serde::{Deserialize, Serialize};

use super::super::random::SimRng;

/// Slope of leaky ReLU and scale of ELU for negative inputs.
pub const ALPHA: f32 = 0.1;

/// One entry of the fixed activation catalog.
///
/// Every activation carries a complexity constant; a controller's upkeep is the sum of its
/// nodes' complexities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activation {
    /// 1 for `x >= 0`, else 0.
    Step,
    /// -1, 0 or 1.
    Sign,
    /// Identity.
    Linear,
    /// Logistic function.
    Sigmoid,
    /// Hyperbolic tangent.
    Tanh,
    /// `max(0, x)`.
    Relu,
    /// `max(ALPHA * x, x)`.
    LeakyRelu,
    /// Exponential linear unit.
    Elu,
}

impl Activation {
    /// The whole catalog, in sampling order.
    pub const ALL: [Activation; 8] = [
        Activation::Step,
        Activation::Sign,
        Activation::Linear,
        Activation::Sigmoid,
        Activation::Tanh,
        Activation::Relu,
        Activation::LeakyRelu,
        Activation::Elu,
    ];

    /// Draws a catalog entry uniformly.
    pub fn random(rng: &mut SimRng) -> Self {
        Self::ALL[rng.index(Self::ALL.len())]
    }

    /// Applies the function.
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Step => {
                if x >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Sign => {
                if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            Activation::Linear => x,
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.max(0.0),
            Activation::LeakyRelu => x.max(ALPHA * x),
            Activation::Elu => {
                if x >= 0.0 {
                    x
                } else {
                    ALPHA * (x.exp() - 1.0)
                }
            }
        }
    }

    /// Upkeep cost of one node using this function.
    pub fn complexity(self) -> f32 {
        match self {
            Activation::Step | Activation::Sign => 0.1,
            Activation::Linear => 0.5,
            Activation::Sigmoid => 1.75,
            Activation::Tanh => 2.5,
            Activation::Relu => 1.0,
            Activation::LeakyRelu => 1.2,
            Activation::Elu => 3.0,
        }
    }
}
