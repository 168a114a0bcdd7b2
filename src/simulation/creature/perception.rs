//! Perception: one scan of the world per creature per tick.
//!
//! The scan fills the controller's input vector and captures the targets the creature may act
//! on later in the same tick. Captured targets are indices into the entity slice that was
//! scanned and are only meaningful for the current pass.

use ndarray::Array1;

use super::super::geometric_utils::{border_offset, squared_distance};
use super::super::params::Params;
use super::super::random::SimRng;
use super::super::thing::Thing;
use super::vision::can_see;

/// Layout of the perception vector.
pub mod input {
    /// 1 if a predator is in sight, else 0.
    pub const CAN_SEE_PREDATOR: usize = 0;
    /// Predator x offset from the creature.
    pub const PREDATOR_DX: usize = 1;
    /// Predator y offset from the creature.
    pub const PREDATOR_DY: usize = 2;
    /// 1 if prey is in sight, else 0.
    pub const CAN_SEE_PREY: usize = 3;
    /// Prey x offset from the creature.
    pub const PREY_DX: usize = 4;
    /// Prey y offset from the creature.
    pub const PREY_DY: usize = 5;
    /// Current energy.
    pub const ENERGY: usize = 6;
    /// Signed offset to the nearest vertical border.
    pub const BORDER_X: usize = 7;
    /// Signed offset to the nearest horizontal border.
    pub const BORDER_Y: usize = 8;
    /// First exploration input, when enabled.
    pub const EXPLORE_A: usize = 9;
    /// Second exploration input, when enabled.
    pub const EXPLORE_B: usize = 10;
}

/// Result of one creature's scan.
#[derive(Debug, Clone)]
pub struct Perception {
    /// Controller input vector.
    pub inputs: Array1<f32>,
    /// Index of the nearest visible predator, if any.
    pub predator: Option<usize>,
    /// Index of the nearest visible prey (plant or creature), if any.
    pub prey: Option<usize>,
    /// Creature to fight if the controller asks to attack: the predator if one is in
    /// sight, otherwise the prey when that prey is a creature.
    pub target: Option<usize>,
    /// Nearest live plant the creature overlaps and can eat.
    pub plant: Option<usize>,
}

/// Keeps the nearest candidate by squared distance; the first one seen wins ties.
#[derive(Default)]
struct Nearest {
    best: Option<(usize, f32)>,
}

impl Nearest {
    fn offer(&mut self, index: usize, distance_sq: f32) {
        match self.best {
            Some((_, best)) if best <= distance_sq => {}
            _ => self.best = Some((index, distance_sq)),
        }
    }

    fn index(&self) -> Option<usize> {
        self.best.map(|(index, _)| index)
    }
}

/// Scans `things` from the point of view of the creature at `focal`.
///
/// # Arguments
///
/// * `things` - Every entity of the world, the focal creature included
/// * `focal` - Index of the perceiving creature
/// * `params` - Simulation parameters (world extent, exploration inputs)
/// * `rng` - Random source for the exploration inputs
///
/// # Panics
///
/// If `things[focal]` is not a creature.
pub fn perceive(things: &[Thing], focal: usize, params: &Params, rng: &mut SimRng) -> Perception {
    let Thing::Creature(creature) = &things[focal] else {
        panic!("perceive called on a plant");
    };

    let mut predator = Nearest::default();
    let mut prey = Nearest::default();
    let mut plant = Nearest::default();

    for (index, other) in things.iter().enumerate() {
        if index == focal || !other.is_alive() {
            continue;
        }
        let is_prey = other.is_edible_by(creature);
        let is_predator = other.threatens(creature);
        if !is_prey && !is_predator {
            continue;
        }

        let body = other.body();
        let distance_sq = squared_distance(&creature.body.pos, &body.pos);

        if is_prey && matches!(other, Thing::Plant(_)) && creature.body.overlaps(body) {
            plant.offer(index, distance_sq);
        }
        if !can_see(creature, body) {
            continue;
        }
        if is_predator {
            predator.offer(index, distance_sq);
        }
        if is_prey {
            prey.offer(index, distance_sq);
        }
    }

    let mut inputs = Array1::zeros(params.input_size());
    let pos = &creature.body.pos;

    if let Some(index) = predator.index() {
        let seen = &things[index].body().pos;
        inputs[input::CAN_SEE_PREDATOR] = 1.0;
        inputs[input::PREDATOR_DX] = seen[0] - pos[0];
        inputs[input::PREDATOR_DY] = seen[1] - pos[1];
    }
    if let Some(index) = prey.index() {
        let seen = &things[index].body().pos;
        inputs[input::CAN_SEE_PREY] = 1.0;
        inputs[input::PREY_DX] = seen[0] - pos[0];
        inputs[input::PREY_DY] = seen[1] - pos[1];
    }
    inputs[input::ENERGY] = creature.energy();
    inputs[input::BORDER_X] = border_offset(pos[0], params.box_width);
    inputs[input::BORDER_Y] = border_offset(pos[1], params.box_height);
    if params.exploration_inputs {
        inputs[input::EXPLORE_A] = rng.unit();
        inputs[input::EXPLORE_B] = rng.unit();
    }

    let target = predator.index().or_else(|| {
        prey.index()
            .filter(|&index| matches!(things[index], Thing::Creature(_)))
    });

    Perception {
        inputs,
        predator: predator.index(),
        prey: prey.index(),
        target,
        plant: plant.index(),
    }
}
