#![allow(missing_docs)]

use biosphere::simulation::brain::{Activation, Brain, Mutation};
use biosphere::simulation::params::{OUTPUT_SIZE, Params};
use biosphere::simulation::random::SimRng;
use ndarray::Array1;

fn no_mutation() -> Mutation {
    Mutation {
        bias_chance: 0.0,
        bias_delta: 0.1,
        activation_chance: 0.0,
        weight_chance: 0.0,
        weight_delta: 0.05,
    }
}

#[test]
fn test_fresh_brain_shape() {
    let params = Params::default();
    let mut rng = SimRng::seed_from_u64(7);
    let brain = Brain::new(&params, &mut rng);

    assert_eq!(brain.input_size(), params.input_size());
    assert_eq!(brain.output_size(), OUTPUT_SIZE);
    assert_eq!(brain.layers().len(), params.hidden_layers + 1);

    let width = params.layer_width();
    assert_eq!(brain.layers()[0].fan_in(), params.input_size());
    for layer in &brain.layers()[1..] {
        assert_eq!(layer.fan_in(), width);
    }
    for layer in &brain.layers()[..params.hidden_layers] {
        assert_eq!(layer.width(), width);
    }

    // Fresh weights lie in [-2, 2] and biases start at zero
    for layer in brain.layers() {
        assert!(layer.weights.iter().all(|w| (-2.0..=2.0).contains(w)));
        assert!(layer.biases.iter().all(|&b| b == 0.0));
    }
}

#[test]
fn test_complexity_factor_sums_non_input_nodes() {
    let params = Params::default();
    let mut rng = SimRng::seed_from_u64(11);
    let brain = Brain::new(&params, &mut rng);

    let expected: f32 = brain
        .layers()
        .iter()
        .flat_map(|layer| layer.activations.iter())
        .map(|a| a.complexity())
        .sum();
    assert!((brain.complexity_factor() - expected).abs() < 1e-4);

    // 5 hidden layers of 18 nodes plus 4 outputs, all linear (0.5 each)
    let linear = Brain::constant(9, 18, 5, Activation::Linear, 0.0, 0.0);
    assert_eq!(linear.complexity_factor(), 94.0 * 0.5);
}

#[test]
fn test_constant_brain_forward_pass() {
    let mut brain = Brain::constant(2, 2, 1, Activation::Linear, 1.0, 0.0);
    let outputs = brain.think(&Array1::from_vec(vec![1.0, 2.0]));

    // Each hidden node sums the inputs (3), each output sums both hidden nodes (6)
    assert_eq!(outputs.len(), OUTPUT_SIZE);
    for &value in outputs.iter() {
        assert_eq!(value, 6.0);
    }

    let mut zero = Brain::constant(9, 18, 5, Activation::Linear, 0.0, 0.0);
    let outputs = zero.think(&Array1::from_elem(9, 3.5));
    assert!(outputs.iter().all(|&v| v == 0.0));
}

#[test]
fn test_bias_and_activation_applied() {
    let mut brain = Brain::constant(1, 1, 1, Activation::Relu, 1.0, -1.0);

    // hidden = relu(-1 + x); output = relu(-1 + hidden)
    let outputs = brain.think(&Array1::from_vec(vec![4.0]));
    assert!(outputs.iter().all(|&v| v == 2.0));

    let outputs = brain.think(&Array1::from_vec(vec![0.5]));
    assert!(outputs.iter().all(|&v| v == 0.0));
}

#[test]
fn test_evaluation_is_deterministic() {
    let params = Params::default();
    let mut rng = SimRng::seed_from_u64(3);
    let mut brain = Brain::new(&params, &mut rng);
    let mut twin = brain.clone();

    let inputs = Array1::from_vec(vec![1.0, -3.0, 0.5, 0.0, 2.0, -1.0, 20.0, 100.0, -50.0]);
    let first = brain.think(&inputs);
    let second = brain.think(&inputs);
    let from_twin = twin.think(&inputs);

    assert_eq!(first, second);
    assert_eq!(first, from_twin);
}

#[test]
fn test_sequential_evaluations_do_not_leak() {
    let params = Params::default();
    let mut rng = SimRng::seed_from_u64(5);
    let mut brain = Brain::new(&params, &mut rng);
    let mut fresh = brain.clone();

    let a = Array1::from_vec(vec![1.0, 4.0, -4.0, 0.0, 0.0, 0.0, 12.0, 30.0, 40.0]);
    let b = Array1::from_vec(vec![0.0, 0.0, 0.0, 1.0, 7.0, -2.0, 3.0, -300.0, 200.0]);

    let _ = brain.think(&a);
    let after_a = brain.think(&b);
    let only_b = fresh.think(&b);

    assert_eq!(after_a, only_b);
}

#[test]
#[should_panic(expected = "wrong length")]
fn test_wrong_input_length_panics() {
    let mut brain = Brain::constant(9, 4, 1, Activation::Linear, 0.0, 0.0);
    let _ = brain.think(&Array1::zeros(3));
}

#[test]
fn test_inherit_without_mutation_is_exact_copy() {
    let params = Params::default();
    let mut rng = SimRng::seed_from_u64(9);
    let mut parent = Brain::new(&params, &mut rng);
    let mut child = parent.inherit_with(&no_mutation(), &mut rng);

    assert_eq!(Brain::distance(&parent, &child), 0.0);
    assert_eq!(parent.complexity_factor(), child.complexity_factor());

    let inputs = Array1::from_elem(params.input_size(), 0.25);
    assert_eq!(parent.think(&inputs), child.think(&inputs));
}

#[test]
fn test_inherit_with_certain_mutation_changes_parameters() {
    let params = Params::default();
    let mut rng = SimRng::seed_from_u64(13);
    let parent = Brain::new(&params, &mut rng);
    let mutation = Mutation {
        bias_chance: 1.0,
        bias_delta: 0.1,
        activation_chance: 0.0,
        weight_chance: 1.0,
        weight_delta: 0.05,
    };
    let child = parent.inherit_with(&mutation, &mut rng);

    assert!(Brain::distance(&parent, &child) > 0.0);
    assert_eq!(parent.parameter_count(), child.parameter_count());

    // Perturbation stays within weight * (1 ± delta) ± delta
    for (layer_p, layer_c) in parent.layers().iter().zip(child.layers()) {
        for (wp, wc) in layer_p.weights.iter().zip(layer_c.weights.iter()) {
            assert!((wc - wp).abs() <= wp.abs() * 0.05 + 0.05 + 1e-6);
        }
        // Biases start at zero, so a mutated bias is the additive term only
        for &bias in layer_c.biases.iter() {
            assert!(bias.abs() <= 0.1);
        }
    }
}

#[test]
fn test_distance_between_different_shapes_is_infinite() {
    let small = Brain::constant(9, 4, 1, Activation::Linear, 0.0, 0.0);
    let large = Brain::constant(9, 8, 2, Activation::Linear, 0.0, 0.0);
    assert_eq!(Brain::distance(&small, &large), f32::INFINITY);
}

#[test]
fn test_activation_catalog() {
    assert_eq!(Activation::Step.apply(0.0), 1.0);
    assert_eq!(Activation::Step.apply(-0.1), 0.0);
    assert_eq!(Activation::Sign.apply(-3.0), -1.0);
    assert_eq!(Activation::Sign.apply(0.0), 0.0);
    assert_eq!(Activation::Sign.apply(2.0), 1.0);
    assert_eq!(Activation::Linear.apply(-7.5), -7.5);
    assert_eq!(Activation::Sigmoid.apply(0.0), 0.5);
    assert_eq!(Activation::Tanh.apply(0.0), 0.0);
    assert_eq!(Activation::Relu.apply(-2.0), 0.0);
    assert_eq!(Activation::LeakyRelu.apply(-2.0), -0.2);
    assert_eq!(Activation::LeakyRelu.apply(2.0), 2.0);
    assert_eq!(Activation::Elu.apply(3.0), 3.0);
    assert!((Activation::Elu.apply(-1.0) - 0.1 * ((-1.0f32).exp() - 1.0)).abs() < 1e-7);

    assert_eq!(Activation::ALL.len(), 8);
    assert_eq!(Activation::Elu.complexity(), 3.0);
    assert_eq!(Activation::Step.complexity(), 0.1);
}
