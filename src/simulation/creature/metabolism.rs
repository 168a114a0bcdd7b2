//! Movement, energy upkeep and grazing.

use ndarray::Array1;
use serde::Serialize;

use super::super::geometric_utils::{clamp_into_box_mut, clamp_length, length, normalized, vec2};
use super::super::plant::Plant;
use super::{Creature, Traits};

/// Energy costs derived once from a creature's traits and controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyCosts {
    /// Energy per simulated second spent just staying alive.
    pub idle: f32,
    /// Energy per unit of distance travelled.
    pub movement: f32,
    /// Energy a parent pays per child.
    pub per_offspring: f32,
}

/// Derives the energy costs of a creature.
///
/// # Arguments
///
/// * `traits` - Heritable traits
/// * `size` - Body radius
/// * `complexity` - Controller complexity factor
/// * `upkeep_rate` - Idle energy per unit of complexity
pub fn energy_costs(traits: &Traits, size: f32, complexity: f32, upkeep_rate: f32) -> EnergyCosts {
    let idle = traits.energy_storage * 0.01
        + traits.vision_distance * 0.015
        + traits.vision_angle * 0.001
        + traits.strength * 0.01
        + size * 0.02
        + complexity * upkeep_rate;
    let movement = 0.1 * (size * 0.1 + traits.speed * 0.05);
    let per_offspring = size * 1.5;

    EnergyCosts {
        idle,
        movement,
        per_offspring,
    }
}

/// Turns the controller's movement outputs into a velocity and moves the creature.
///
/// The `(move_x, move_y)` pair is clamped to unit length and scaled by the creature's speed;
/// the new position is clamped into the world box.
///
/// # Returns
///
/// The velocity used for this tick.
pub fn locomote(
    creature: &mut Creature,
    move_x: f32,
    move_y: f32,
    dt: f32,
    box_width: f32,
    box_height: f32,
) -> Array1<f32> {
    let velocity = clamp_length(&vec2(move_x, move_y), 1.0) * creature.traits.speed;
    creature.body.pos.scaled_add(dt, &velocity);
    clamp_into_box_mut(&mut creature.body.pos, box_width, box_height);
    velocity
}

/// Charges idle and movement energy for one tick.
pub fn burn(creature: &mut Creature, velocity: &Array1<f32>, dt: f32) {
    let cost = dt
        * (length(velocity) * creature.movement_energy_consumption()
            + creature.idle_energy_consumption());
    creature.consume_energy(cost);
}

/// Turns the creature to face its velocity; a standing creature faces +x.
pub fn face(creature: &mut Creature, velocity: &Array1<f32>) {
    creature.orientation = normalized(velocity).unwrap_or_else(|| vec2(1.0, 0.0));
}

/// Eats as much of `plant` as fits into the creature's energy storage.
///
/// # Arguments
///
/// * `creature` - The grazing creature
/// * `plant` - The plant it overlaps
/// * `energy_per_size` - Energy yielded by one unit of plant radius
///
/// # Returns
///
/// The energy gained; zero if the plant is dead or not on the creature's diet.
pub fn graze(creature: &mut Creature, plant: &mut Plant, energy_per_size: f32) -> f32 {
    if !plant.body.alive || !creature.can_eat(&plant.body) {
        return 0.0;
    }
    let available = plant.body.size * energy_per_size;
    let room = creature.traits.energy_storage - creature.energy();
    if available <= room {
        // Whole plant fits.
        let gained = creature.gain_energy(available);
        plant.shrink(plant.body.size);
        return gained;
    }
    let gained = creature.gain_energy(room);
    plant.shrink(room / energy_per_size);
    gained
}
