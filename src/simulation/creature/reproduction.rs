//! Cooldown- and energy-gated cloning.

use super::super::params::Params;
use super::super::random::SimRng;
use super::Creature;

/// Advances the reproduction cooldown by `dt` simulated seconds.
pub fn advance_cooldown(creature: &mut Creature, dt: f32) {
    creature.since_reproduction += dt;
}

/// Whether enough simulated time has passed since the last litter.
pub fn is_ready(creature: &Creature) -> bool {
    creature.since_reproduction >= creature.traits.age_to_reproduce
}

/// Draws a litter size: `max(0, U(avg - offset, avg + offset))`, truncated toward zero.
pub fn litter_size(average: f32, offset: f32, rng: &mut SimRng) -> usize {
    rng.uniform(average - offset, average + offset).max(0.0) as usize
}

/// Tries to produce a litter.
///
/// Nothing happens while the cooldown is running. Otherwise a litter size is drawn; if the
/// parent cannot pay for the whole litter the attempt fails silently and the cooldown keeps
/// running. On success the parent pays `count * energy_per_offspring`, its cooldown restarts
/// and `count` independently mutated clones are returned.
///
/// # Returns
///
/// The newborn creatures, positioned on the parent.
pub fn try_reproduce(parent: &mut Creature, params: &Params, rng: &mut SimRng) -> Vec<Creature> {
    if !is_ready(parent) {
        return Vec::new();
    }

    let count = litter_size(
        parent.traits.average_offspring_count,
        parent.traits.max_offspring_offset,
        rng,
    );
    let required = parent.energy_per_offspring() * count as f32;
    if parent.energy() < required {
        return Vec::new();
    }

    parent.set_energy(parent.energy() - required);
    parent.since_reproduction = 0.0;

    (0..count).map(|_| parent.offspring(params, rng)).collect()
}
