//! Gene masks and heritable trait mutation.
//!
//! A gene is a 16-bit tag carried by every thing in the world. A creature's diet is a mask of
//! the same width: creature A can eat thing B iff `B.gene & A.diet != 0`.

use super::random::SimRng;

/// Fixed-width genetic tag.
pub type Gene = u16;

/// Gene carried by every plant, and the diet of every founder creature.
pub const PRODUCER_GENE: Gene = 0b1;

/// Returns `true` when a `diet` mask accepts a thing tagged with `gene`.
pub fn diet_accepts(diet: Gene, gene: Gene) -> bool {
    gene & diet != 0
}

/// Flips each bit of a mask independently with probability `flip_chance`.
///
/// # Arguments
///
/// * `gene` - Mask to mutate
/// * `flip_chance` - Per-bit flip probability
/// * `rng` - Random source
pub fn mutate_gene(gene: Gene, flip_chance: f32, rng: &mut SimRng) -> Gene {
    let mut flips: Gene = 0;
    for bit in 0..Gene::BITS {
        if rng.chance(flip_chance) {
            flips |= 1 << bit;
        }
    }
    gene ^ flips
}

/// With probability `chance`, scales a trait by `U(1 - delta, 1 + delta)`.
pub fn mutate_trait(value: f32, chance: f32, delta: f32, rng: &mut SimRng) -> f32 {
    if !rng.chance(chance) {
        return value;
    }
    value * rng.uniform(1.0 - delta, 1.0 + delta)
}

/// Mutates each RGB channel like a trait, saturating into `0..=255`.
pub fn mutate_color(color: [u8; 3], chance: f32, delta: f32, rng: &mut SimRng) -> [u8; 3] {
    color.map(|channel| mutate_trait(f32::from(channel), chance, delta, rng).clamp(0.0, 255.0) as u8)
}
