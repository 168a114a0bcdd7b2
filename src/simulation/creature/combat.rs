//! Pairwise fights.

use super::super::geometric_utils::squared_distance;
use super::Creature;

/// Which side of a fight survived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightOutcome {
    /// The creature that started the fight won.
    AttackerWon,
    /// The creature that was attacked won.
    DefenderWon,
}

/// Energy a creature commits to a fight: `min(energy, strength * size)`.
pub fn committed_force(creature: &Creature) -> f32 {
    creature.energy().min(creature.traits.strength * creature.body.size)
}

/// Whether `defender` is close enough for `attacker` to engage.
///
/// The squared centre distance is compared directly against the attacker's radius.
pub fn in_range(attacker: &Creature, defender: &Creature) -> bool {
    squared_distance(&attacker.body.pos, &defender.body.pos) <= attacker.body.size
}

/// Attempts an attack, checking that both sides are alive and within range first.
///
/// # Returns
///
/// `None` if the fight did not happen or ended in a tie.
pub fn attempt_attack(attacker: &mut Creature, defender: &mut Creature) -> Option<FightOutcome> {
    if !attacker.is_alive() || !defender.is_alive() || !in_range(attacker, defender) {
        return None;
    }
    resolve(attacker, defender)
}

/// Resolves a fight between two creatures.
///
/// Equal committed forces leave both untouched. Otherwise the weaker side dies and the winner
/// absorbs the loser's energy minus the smaller committed force, capped at its storage.
///
/// # Returns
///
/// `None` on a tie.
pub fn resolve(attacker: &mut Creature, defender: &mut Creature) -> Option<FightOutcome> {
    let attack = committed_force(attacker);
    let defense = committed_force(defender);
    if attack == defense {
        return None;
    }

    let spent = attack.min(defense);
    let (winner, loser, outcome) = if attack < defense {
        (defender, attacker, FightOutcome::DefenderWon)
    } else {
        (attacker, defender, FightOutcome::AttackerWon)
    };

    loser.kill();
    winner.gain_energy(loser.energy() - spent);
    Some(outcome)
}
