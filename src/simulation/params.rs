use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of controller outputs: move x, move y, reproduce, attack.
pub const OUTPUT_SIZE: usize = 4;

/// Perception features before the optional exploration inputs.
pub const BASE_INPUT_SIZE: usize = 9;

/// Simulation parameters that control ecosystem behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Simulation area width.
    pub box_width: f32,
    /// Simulation area height.
    pub box_height: f32,
    /// Plants created when the world is built.
    pub n_plant: usize,
    /// Creatures created when the world is built, and again after every extinction.
    pub n_creature: usize,
    /// Simulated seconds between two plant spawns.
    pub plant_spawn_interval: f32,
    /// Multiplier from wall-clock seconds to simulated seconds.
    pub time_speed: f32,

    /// Plant radius gained per simulated second while unobstructed.
    pub plant_growth_rate: f32,
    /// Energy yielded by one unit of plant radius.
    pub plant_energy_per_size: f32,

    // Founder creature traits
    /// Top speed of founder creatures.
    pub founder_speed: f32,
    /// Half-angle of the vision cone in degrees.
    pub founder_vision_angle: f32,
    /// Vision range.
    pub founder_vision_distance: f32,
    /// Combat strength multiplier.
    pub founder_strength: f32,
    /// Maximum energy a founder can hold.
    pub founder_energy_storage: f32,
    /// Mean litter size.
    pub founder_average_offspring: f32,
    /// Half-width of the litter size distribution.
    pub founder_offspring_offset: f32,
    /// Simulated seconds between litters.
    pub founder_age_to_reproduce: f32,
    /// Body radius.
    pub founder_size: f32,

    // Inheritance
    /// Probability that a heritable continuous trait mutates on birth.
    pub trait_mutation_chance: f32,
    /// Relative magnitude of a trait mutation.
    pub trait_mutation_delta: f32,
    /// Probability that a single gene or diet bit flips on birth.
    pub gene_flip_chance: f32,
    /// Whether vision distance and angle are inherited with mutation.
    pub evolve_vision: bool,

    // Controller
    /// Nodes per hidden layer. `None` means twice the input count.
    pub hidden_width: Option<usize>,
    /// Number of hidden layers.
    pub hidden_layers: usize,
    /// Fresh weights are drawn from `[-weight_range, weight_range]`.
    pub weight_range: f32,
    /// Probability that a node bias mutates on inheritance.
    pub bias_mutation_chance: f32,
    /// Magnitude of a bias mutation.
    pub bias_mutation_delta: f32,
    /// Probability that a connection weight mutates on inheritance.
    pub weight_mutation_chance: f32,
    /// Magnitude of a weight mutation.
    pub weight_mutation_delta: f32,
    /// Probability that a node's activation function is resampled on inheritance.
    pub activation_mutation_chance: f32,
    /// Idle energy charged per unit of controller complexity.
    pub brain_upkeep_rate: f32,
    /// Append two uniform random inputs to every perception vector.
    pub exploration_inputs: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            box_width: 1600.0,
            box_height: 900.0,
            n_plant: 200,
            n_creature: 30,
            plant_spawn_interval: 0.5,
            time_speed: 1.0,
            plant_growth_rate: 0.1,
            plant_energy_per_size: 3.0,
            founder_speed: 10.0,
            founder_vision_angle: 30.0,
            founder_vision_distance: 10.0,
            founder_strength: 1.0,
            founder_energy_storage: 20.0,
            founder_average_offspring: 3.0,
            founder_offspring_offset: 1.0,
            founder_age_to_reproduce: 10.0,
            founder_size: 5.0,
            trait_mutation_chance: 0.01,
            trait_mutation_delta: 0.1,
            gene_flip_chance: 0.01,
            evolve_vision: false,
            hidden_width: None,
            hidden_layers: 5,
            weight_range: 2.0,
            bias_mutation_chance: 0.01,
            bias_mutation_delta: 0.1,
            weight_mutation_chance: 0.01,
            weight_mutation_delta: 0.05,
            activation_mutation_chance: 0.00125,
            brain_upkeep_rate: 0.01,
            exploration_inputs: false,
        }
    }
}

/// A parameter set that would make the simulation meaningless.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// A value that must be strictly positive and finite was not.
    #[error("`{name}` must be positive and finite, got {value}")]
    NotPositive {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A value that must be non-negative and finite was not.
    #[error("`{name}` must be non-negative and finite, got {value}")]
    Negative {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A probability outside `[0, 1]`.
    #[error("`{name}` must be a probability in [0, 1], got {value}")]
    NotProbability {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A mutation delta that could flip the sign of a trait.
    #[error("`{name}` must lie in [0, 1), got {value}")]
    DeltaOutOfRange {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// The controller would have no hidden nodes.
    #[error("controller needs at least one hidden layer of non-zero width")]
    EmptyController,
}

fn positive(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParamsError::Negative { name, value })
    }
}

fn probability(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParamsError::NotProbability { name, value })
    }
}

fn delta(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParamsError::DeltaOutOfRange { name, value })
    }
}

impl Params {
    /// Number of controller inputs produced by perception.
    pub fn input_size(&self) -> usize {
        if self.exploration_inputs {
            BASE_INPUT_SIZE + 2
        } else {
            BASE_INPUT_SIZE
        }
    }

    /// Width of every hidden layer.
    pub fn layer_width(&self) -> usize {
        self.hidden_width.unwrap_or(self.input_size() * 2)
    }

    /// Checks every field, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), ParamsError> {
        positive("box_width", self.box_width)?;
        positive("box_height", self.box_height)?;
        positive("plant_spawn_interval", self.plant_spawn_interval)?;
        positive("time_speed", self.time_speed)?;
        non_negative("plant_growth_rate", self.plant_growth_rate)?;
        positive("plant_energy_per_size", self.plant_energy_per_size)?;

        non_negative("founder_speed", self.founder_speed)?;
        non_negative("founder_vision_angle", self.founder_vision_angle)?;
        non_negative("founder_vision_distance", self.founder_vision_distance)?;
        non_negative("founder_strength", self.founder_strength)?;
        positive("founder_energy_storage", self.founder_energy_storage)?;
        non_negative("founder_average_offspring", self.founder_average_offspring)?;
        non_negative("founder_offspring_offset", self.founder_offspring_offset)?;
        non_negative("founder_age_to_reproduce", self.founder_age_to_reproduce)?;
        positive("founder_size", self.founder_size)?;

        probability("trait_mutation_chance", self.trait_mutation_chance)?;
        delta("trait_mutation_delta", self.trait_mutation_delta)?;
        probability("gene_flip_chance", self.gene_flip_chance)?;

        if self.hidden_layers == 0 || self.layer_width() == 0 {
            return Err(ParamsError::EmptyController);
        }
        non_negative("weight_range", self.weight_range)?;
        probability("bias_mutation_chance", self.bias_mutation_chance)?;
        non_negative("bias_mutation_delta", self.bias_mutation_delta)?;
        probability("weight_mutation_chance", self.weight_mutation_chance)?;
        non_negative("weight_mutation_delta", self.weight_mutation_delta)?;
        probability("activation_mutation_chance", self.activation_mutation_chance)?;
        non_negative("brain_upkeep_rate", self.brain_upkeep_rate)?;

        Ok(())
    }
}
