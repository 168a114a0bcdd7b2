//! One layer of controller nodes.

use ndarray::{Array1, Array2};
use serde::Serialize;

use super::super::random::SimRng;
use super::activation::Activation;

/// A dense layer of nodes fed by every node of the previous layer.
///
/// Row `i` of `weights` holds the incoming connection weights of node `i`. The stamp and
/// value vectors cache each node's output for the evaluation that last computed it.
#[derive(Debug, Clone, Serialize)]
pub struct Layer {
    /// Weight matrix (`width` × `fan_in`).
    pub weights: Array2<f32>,
    /// Bias vector (`width`).
    pub biases: Array1<f32>,
    /// Activation function of each node.
    pub activations: Vec<Activation>,
    #[serde(skip)]
    pub(super) stamps: Vec<u32>,
    #[serde(skip)]
    pub(super) values: Vec<f32>,
}

impl Layer {
    fn from_parts(weights: Array2<f32>, biases: Array1<f32>, activations: Vec<Activation>) -> Self {
        let width = biases.len();
        Self {
            weights,
            biases,
            activations,
            stamps: vec![0; width],
            values: vec![0.0; width],
        }
    }

    /// Creates a layer with weights uniform in `[-weight_range, weight_range]`, zero biases and
    /// a random activation per node.
    pub fn new_random(fan_in: usize, width: usize, weight_range: f32, rng: &mut SimRng) -> Self {
        let mut activations = Vec::with_capacity(width);
        let mut weights = Array2::zeros((width, fan_in));
        for mut row in weights.rows_mut() {
            activations.push(Activation::random(rng));
            for weight in row.iter_mut() {
                *weight = rng.uniform(-weight_range, weight_range);
            }
        }
        Self::from_parts(weights, Array1::zeros(width), activations)
    }

    /// Creates a layer where every node shares the same weight, bias and activation.
    pub fn constant(fan_in: usize, width: usize, activation: Activation, weight: f32, bias: f32) -> Self {
        Self::from_parts(
            Array2::from_elem((width, fan_in), weight),
            Array1::from_elem(width, bias),
            vec![activation; width],
        )
    }

    /// Number of nodes.
    pub fn width(&self) -> usize {
        self.biases.len()
    }

    /// Number of incoming connections per node.
    pub fn fan_in(&self) -> usize {
        self.weights.ncols()
    }

    /// Sum of the complexity constants of this layer's nodes.
    pub fn complexity(&self) -> f32 {
        self.activations.iter().map(|a| a.complexity()).sum()
    }

    /// Copies the layer and mutates it node by node: bias, then activation, then each
    /// incoming weight, each with its own independent chance.
    pub fn inherit(&self, mutation: &Mutation, rng: &mut SimRng) -> Self {
        let mut child = Self::from_parts(
            self.weights.clone(),
            self.biases.clone(),
            self.activations.clone(),
        );

        for node in 0..child.width() {
            if rng.chance(mutation.bias_chance) {
                child.biases[node] = rng.perturb(child.biases[node], mutation.bias_delta);
            }
            if rng.chance(mutation.activation_chance) {
                child.activations[node] = Activation::random(rng);
            }
            for weight in child.weights.row_mut(node).iter_mut() {
                if rng.chance(mutation.weight_chance) {
                    *weight = rng.perturb(*weight, mutation.weight_delta);
                }
            }
        }

        child
    }
}

/// Mutation rates applied when a controller is inherited.
#[derive(Debug, Clone, Copy)]
pub struct Mutation {
    /// Probability that a bias is perturbed.
    pub bias_chance: f32,
    /// Magnitude of a bias perturbation.
    pub bias_delta: f32,
    /// Probability that an activation function is resampled.
    pub activation_chance: f32,
    /// Probability that a weight is perturbed.
    pub weight_chance: f32,
    /// Magnitude of a weight perturbation.
    pub weight_delta: f32,
}
