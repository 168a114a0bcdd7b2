//! Neural controller for creatures.
//!
//! A fixed-shape feed-forward network: `hidden_layers` dense layers of equal width followed by
//! an output layer. Nodes are addressed by `(layer, index)` handles into a per-layer arena and
//! every node picks its own activation from the catalog in [`activation`].
//!
//! Evaluation is lazy: outputs pull their inputs recursively, and a generation stamp per call
//! guarantees that each node is computed at most once per call no matter how many downstream
//! nodes read it.

use ndarray::Array1;
use serde::Serialize;

pub mod activation;
pub mod layer;

pub use activation::Activation;
pub use layer::{Layer, Mutation};

use super::params::{OUTPUT_SIZE, Params};
use super::random::SimRng;

/// Address of a non-input node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    /// Layer index; hidden layers first, the output layer last.
    pub layer: usize,
    /// Node index inside the layer.
    pub index: usize,
}

/// Mutating feed-forward controller.
#[derive(Debug, Clone, Serialize)]
pub struct Brain {
    /// Hidden layers followed by the output layer.
    layers: Vec<Layer>,
    /// Values of the input nodes for the current evaluation.
    #[serde(skip)]
    inputs: Array1<f32>,
    /// Stamp of the current evaluation.
    #[serde(skip)]
    generation: u32,
    /// Cached sum of node complexities.
    complexity: f32,
}

impl Brain {
    fn from_layers(input_size: usize, layers: Vec<Layer>) -> Self {
        let complexity = layers.iter().map(Layer::complexity).sum();
        Self {
            layers,
            inputs: Array1::zeros(input_size),
            generation: 0,
            complexity,
        }
    }

    /// Creates a fresh controller shaped by `params`, with random weights and activations.
    pub fn new(params: &Params, rng: &mut SimRng) -> Self {
        Self::new_random(
            params.input_size(),
            params.layer_width(),
            params.hidden_layers,
            OUTPUT_SIZE,
            params.weight_range,
            rng,
        )
    }

    /// Creates a controller of explicit shape with random weights and activations.
    pub fn new_random(
        input_size: usize,
        width: usize,
        depth: usize,
        output_size: usize,
        weight_range: f32,
        rng: &mut SimRng,
    ) -> Self {
        assert!(width > 0 && depth > 0, "controller needs hidden nodes");
        let mut layers = Vec::with_capacity(depth + 1);
        let mut fan_in = input_size;
        for _ in 0..depth {
            layers.push(Layer::new_random(fan_in, width, weight_range, rng));
            fan_in = width;
        }
        layers.push(Layer::new_random(fan_in, output_size, weight_range, rng));
        Self::from_layers(input_size, layers)
    }

    /// Creates a controller where every node shares one activation, weight and bias.
    ///
    /// Useful to pin behaviour: a linear controller with zero weights and biases outputs zeros
    /// for any input.
    pub fn constant(
        input_size: usize,
        width: usize,
        depth: usize,
        activation: Activation,
        weight: f32,
        bias: f32,
    ) -> Self {
        assert!(width > 0 && depth > 0, "controller needs hidden nodes");
        let mut layers = Vec::with_capacity(depth + 1);
        let mut fan_in = input_size;
        for _ in 0..depth {
            layers.push(Layer::constant(fan_in, width, activation, weight, bias));
            fan_in = width;
        }
        layers.push(Layer::constant(fan_in, OUTPUT_SIZE, activation, weight, bias));
        Self::from_layers(input_size, layers)
    }

    /// Deep-copies the controller and mutates the copy using the rates in `params`.
    pub fn inherit(&self, params: &Params, rng: &mut SimRng) -> Self {
        let mutation = Mutation {
            bias_chance: params.bias_mutation_chance,
            bias_delta: params.bias_mutation_delta,
            activation_chance: params.activation_mutation_chance,
            weight_chance: params.weight_mutation_chance,
            weight_delta: params.weight_mutation_delta,
        };
        self.inherit_with(&mutation, rng)
    }

    /// Deep-copies the controller and mutates the copy with explicit rates.
    pub fn inherit_with(&self, mutation: &Mutation, rng: &mut SimRng) -> Self {
        let layers = self
            .layers
            .iter()
            .map(|layer| layer.inherit(mutation, rng))
            .collect();
        Self::from_layers(self.input_size(), layers)
    }

    /// Runs one evaluation.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Perception vector, exactly [`Brain::input_size`] long
    ///
    /// # Returns
    ///
    /// The output layer's values.
    pub fn think(&mut self, inputs: &Array1<f32>) -> Array1<f32> {
        assert_eq!(
            inputs.len(),
            self.input_size(),
            "controller input vector has the wrong length"
        );
        self.generation = self.generation.wrapping_add(1);
        self.inputs.assign(inputs);

        let output_layer = self.layers.len() - 1;
        (0..self.output_size())
            .map(|index| {
                self.node_output(NodeHandle {
                    layer: output_layer,
                    index,
                })
            })
            .collect()
    }

    /// Output of one node for the current evaluation, computing it on first request.
    fn node_output(&mut self, node: NodeHandle) -> f32 {
        let NodeHandle { layer, index } = node;
        if self.layers[layer].stamps[index] == self.generation {
            return self.layers[layer].values[index];
        }

        let mut sum = self.layers[layer].biases[index];
        for from in 0..self.layers[layer].fan_in() {
            let weight = self.layers[layer].weights[[index, from]];
            let value = if layer == 0 {
                self.inputs[from]
            } else {
                self.node_output(NodeHandle {
                    layer: layer - 1,
                    index: from,
                })
            };
            sum += weight * value;
        }
        let value = self.layers[layer].activations[index].apply(sum);

        let cache = &mut self.layers[layer];
        cache.stamps[index] = self.generation;
        cache.values[index] = value;
        value
    }

    /// Sum of the complexity constants of every non-input node.
    pub fn complexity_factor(&self) -> f32 {
        self.complexity
    }

    /// Number of input nodes.
    pub fn input_size(&self) -> usize {
        self.inputs.len()
    }

    /// Number of output nodes.
    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Layer::width)
    }

    /// Hidden layers followed by the output layer.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Activation function of a node.
    pub fn activation(&self, node: NodeHandle) -> Activation {
        self.layers[node.layer].activations[node.index]
    }

    /// Total number of weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| layer.weights.len() + layer.biases.len())
            .sum()
    }

    /// Calculates the Euclidean distance between two controllers.
    ///
    /// Sums squared differences across all weights and biases, then takes the square root.
    /// Controllers of different shape are infinitely far apart.
    pub fn distance(brain1: &Brain, brain2: &Brain) -> f32 {
        let same_shape = brain1.layers.len() == brain2.layers.len()
            && brain1
                .layers
                .iter()
                .zip(&brain2.layers)
                .all(|(a, b)| a.weights.dim() == b.weights.dim());
        if !same_shape {
            return f32::INFINITY;
        }

        let mut sum_sq = 0.0;
        for (layer1, layer2) in brain1.layers.iter().zip(&brain2.layers) {
            for (w1, w2) in layer1.weights.iter().zip(layer2.weights.iter()) {
                let diff = w1 - w2;
                sum_sq += diff * diff;
            }
            for (b1, b2) in layer1.biases.iter().zip(layer2.biases.iter()) {
                let diff = b1 - b2;
                sum_sq += diff * diff;
            }
        }
        sum_sq.sqrt()
    }
}
