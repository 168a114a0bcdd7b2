//! Creature state, heritable traits and lifecycle.

use ndarray::Array1;
use serde::Serialize;

use super::super::body::Body;
use super::super::brain::Brain;
use super::super::genetics::{self, Gene, PRODUCER_GENE, diet_accepts};
use super::super::geometric_utils::vec2;
use super::super::params::Params;
use super::super::random::SimRng;
use super::metabolism::{self, EnergyCosts};

/// Heritable traits of a creature, apart from its body radius and gene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traits {
    /// Top speed.
    pub speed: f32,
    /// Half-angle of the vision cone in degrees.
    pub vision_angle: f32,
    /// Vision range.
    pub vision_distance: f32,
    /// Combat strength multiplier.
    pub strength: f32,
    /// Maximum energy.
    pub energy_storage: f32,
    /// Mask of genes this creature can eat.
    pub diet: Gene,
    /// Mean litter size.
    pub average_offspring_count: f32,
    /// Half-width of the litter size distribution.
    pub max_offspring_offset: f32,
    /// Simulated seconds between litters.
    pub age_to_reproduce: f32,
    /// Display color (RGB).
    pub color: [u8; 3],
}

impl Traits {
    /// Founder traits from `params`, with a random color and a plant-eating diet.
    pub fn founder(params: &Params, rng: &mut SimRng) -> Self {
        Self {
            speed: params.founder_speed,
            vision_angle: params.founder_vision_angle,
            vision_distance: params.founder_vision_distance,
            strength: params.founder_strength,
            energy_storage: params.founder_energy_storage,
            diet: PRODUCER_GENE,
            average_offspring_count: params.founder_average_offspring,
            max_offspring_offset: params.founder_offspring_offset,
            age_to_reproduce: params.founder_age_to_reproduce,
            color: [rng.byte(), rng.byte(), rng.byte()],
        }
    }

    /// Copies the traits, mutating each one independently.
    pub fn inherit(&self, params: &Params, rng: &mut SimRng) -> Self {
        let chance = params.trait_mutation_chance;
        let delta = params.trait_mutation_delta;
        let mutate = |value: f32, rng: &mut SimRng| genetics::mutate_trait(value, chance, delta, rng);

        let speed = mutate(self.speed, rng);
        let color = genetics::mutate_color(self.color, chance, delta, rng);
        let (vision_angle, vision_distance) = if params.evolve_vision {
            (mutate(self.vision_angle, rng), mutate(self.vision_distance, rng))
        } else {
            (self.vision_angle, self.vision_distance)
        };
        let strength = mutate(self.strength, rng);
        let energy_storage = mutate(self.energy_storage, rng);
        let diet = genetics::mutate_gene(self.diet, params.gene_flip_chance, rng);
        let average_offspring_count = mutate(self.average_offspring_count, rng);
        let max_offspring_offset = mutate(self.max_offspring_offset, rng);
        let age_to_reproduce = mutate(self.age_to_reproduce, rng);

        Self {
            speed,
            vision_angle,
            vision_distance,
            strength,
            energy_storage,
            diet,
            average_offspring_count,
            max_offspring_offset,
            age_to_reproduce,
            color,
        }
    }
}

/// A mobile organism driven by its own neural controller.
///
/// Creatures can:
/// - See the nearest predator and prey inside their vision cone
/// - Move, paying energy for distance and for simply being alive
/// - Graze on plants they overlap
/// - Fight the creature they have in sight
/// - Produce litters of mutated clones
/// - Die when energy reaches zero or when they lose a fight
#[derive(Debug, Clone, Serialize)]
pub struct Creature {
    /// Shared thing state.
    pub body: Body,
    /// Heritable traits.
    pub traits: Traits,
    /// Unit vector the creature faces; the vision cone is centred on it.
    pub orientation: Array1<f32>,
    /// Simulated seconds since the last litter (or birth).
    pub since_reproduction: f32,
    energy: f32,
    brain: Brain,
    costs: EnergyCosts,
}

impl Creature {
    /// Creates a creature from explicit parts, with full energy.
    ///
    /// Derived energy costs are computed here from the traits, the radius and the
    /// controller's complexity.
    pub fn new(
        pos: Array1<f32>,
        size: f32,
        gene: Gene,
        traits: Traits,
        brain: Brain,
        params: &Params,
    ) -> Self {
        assert!(size >= 0.0, "creature size must be non-negative");
        assert!(
            traits.energy_storage > 0.0,
            "creature energy storage must be positive"
        );
        let costs = metabolism::energy_costs(
            &traits,
            size,
            brain.complexity_factor(),
            params.brain_upkeep_rate,
        );
        Self {
            body: Body::new(pos, size, gene),
            energy: traits.energy_storage,
            traits,
            orientation: vec2(1.0, 0.0),
            since_reproduction: 0.0,
            brain,
            costs,
        }
    }

    /// Creates a founder creature at a random position with a fresh controller.
    pub fn new_random(params: &Params, rng: &mut SimRng) -> Self {
        let pos = vec2(
            rng.uniform(0.0, params.box_width),
            rng.uniform(0.0, params.box_height),
        );
        let gene = rng.bits16();
        let traits = Traits::founder(params, rng);
        let brain = Brain::new(params, rng);
        let heading = rng.uniform(0.0, std::f32::consts::TAU);

        let mut creature = Self::new(pos, params.founder_size, gene, traits, brain, params);
        creature.orientation = vec2(heading.cos(), heading.sin());
        creature
    }

    /// Creates a mutated clone at the parent's position, with full energy and a fresh
    /// reproduction cooldown.
    pub fn offspring(&self, params: &Params, rng: &mut SimRng) -> Self {
        let brain = self.brain.inherit(params, rng);
        let traits = self.traits.inherit(params, rng);
        let gene = genetics::mutate_gene(self.body.gene, params.gene_flip_chance, rng);
        let size = genetics::mutate_trait(
            self.body.size,
            params.trait_mutation_chance,
            params.trait_mutation_delta,
            rng,
        );

        let mut child = Self::new(self.body.pos.clone(), size, gene, traits, brain, params);
        child.orientation = self.orientation.clone();
        child
    }

    /// Current energy, always within `[0, energy_storage]`.
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Overrides the current energy.
    ///
    /// Panics if `energy` is outside `[0, energy_storage]`.
    pub fn set_energy(&mut self, energy: f32) {
        assert!(
            (0.0..=self.traits.energy_storage).contains(&energy),
            "energy {energy} outside [0, {}]",
            self.traits.energy_storage
        );
        self.energy = energy;
    }

    /// Adds `amount` of energy, capped at the storage limit, and returns what was absorbed.
    pub fn gain_energy(&mut self, amount: f32) -> f32 {
        let before = self.energy;
        self.energy = (self.energy + amount).min(self.traits.energy_storage);
        self.energy - before
    }

    /// Reduces the creature's energy.
    ///
    /// Energy may dip below zero here; [`Creature::starve_if_exhausted`] settles it at the
    /// end of the tick, after grazing had its chance to refill it.
    pub fn consume_energy(&mut self, amount: f32) {
        self.energy -= amount;
    }

    /// Kills the creature if its energy is used up, pinning the energy to zero.
    ///
    /// # Returns
    ///
    /// `true` if the creature starved just now.
    pub fn starve_if_exhausted(&mut self) -> bool {
        if self.energy > 0.0 || !self.body.alive {
            return false;
        }
        self.energy = 0.0;
        self.body.alive = false;
        true
    }

    /// Checks if the creature is alive.
    pub fn is_alive(&self) -> bool {
        self.body.alive
    }

    /// Kills the creature.
    pub fn kill(&mut self) {
        self.body.alive = false;
    }

    /// Whether this creature can eat a thing with the given body.
    pub fn can_eat(&self, other: &Body) -> bool {
        diet_accepts(self.traits.diet, other.gene)
    }

    /// Whether `other` can eat this creature.
    pub fn is_prey_of(&self, other: &Creature) -> bool {
        other.can_eat(&self.body)
    }

    /// Energy burned per simulated second regardless of movement.
    pub fn idle_energy_consumption(&self) -> f32 {
        self.costs.idle
    }

    /// Energy burned per unit of distance travelled.
    pub fn movement_energy_consumption(&self) -> f32 {
        self.costs.movement
    }

    /// Energy a parent pays for each child.
    pub fn energy_per_offspring(&self) -> f32 {
        self.costs.per_offspring
    }

    /// The creature's controller.
    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    /// Evaluates the controller on a perception vector.
    pub fn think(&mut self, inputs: &Array1<f32>) -> Array1<f32> {
        self.brain.think(inputs)
    }
}
