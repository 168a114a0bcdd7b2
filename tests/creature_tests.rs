#![allow(missing_docs)]

use biosphere::simulation::brain::{Activation, Brain};
use biosphere::simulation::creature::{
    Creature, FightOutcome, Traits, combat, metabolism, reproduction,
};
use biosphere::simulation::genetics::{self, Gene, PRODUCER_GENE};
use biosphere::simulation::geometric_utils::vec2;
use biosphere::simulation::params::Params;
use biosphere::simulation::plant::Plant;
use biosphere::simulation::random::SimRng;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

fn still_params() -> Params {
    Params {
        trait_mutation_chance: 0.0,
        gene_flip_chance: 0.0,
        bias_mutation_chance: 0.0,
        weight_mutation_chance: 0.0,
        activation_mutation_chance: 0.0,
        ..Params::default()
    }
}

fn create_creature(x: f32, y: f32, gene: Gene, params: &Params) -> Creature {
    let mut rng = SimRng::seed_from_u64(1);
    let traits = Traits::founder(params, &mut rng);
    let brain = Brain::constant(
        params.input_size(),
        params.layer_width(),
        params.hidden_layers,
        Activation::Linear,
        0.0,
        0.0,
    );
    Creature::new(vec2(x, y), params.founder_size, gene, traits, brain, params)
}

#[test]
fn test_founder_energy_costs() {
    let params = Params::default();
    let creature = create_creature(100.0, 100.0, 0, &params);

    // 20*0.01 + 10*0.015 + 30*0.001 + 1*0.01 + 5*0.02 + 47*0.01
    assert_close(creature.idle_energy_consumption(), 0.96);
    // 0.1 * (5*0.1 + 10*0.05)
    assert_close(creature.movement_energy_consumption(), 0.1);
    assert_close(creature.energy_per_offspring(), 7.5);
    assert_eq!(creature.energy(), 20.0);
    assert!(creature.is_alive());
}

#[test]
fn test_locomote_clamps_speed_and_box() {
    let params = Params::default();
    let mut creature = create_creature(100.0, 100.0, 0, &params);

    let velocity = metabolism::locomote(&mut creature, 3.0, 4.0, 0.5, 1600.0, 900.0);
    assert_close(velocity[0], 6.0);
    assert_close(velocity[1], 8.0);
    assert_close(creature.body.pos[0], 103.0);
    assert_close(creature.body.pos[1], 104.0);

    let velocity = metabolism::locomote(&mut creature, 0.3, -0.4, 1.0, 1600.0, 900.0);
    assert_close(velocity[0], 3.0);
    assert_close(velocity[1], -4.0);

    let mut edge = create_creature(1599.0, 1.0, 0, &params);
    metabolism::locomote(&mut edge, 1.0, -1.0, 1.0, 1600.0, 900.0);
    assert_eq!(edge.body.pos[0], 1600.0);
    assert_eq!(edge.body.pos[1], 0.0);
}

#[test]
fn test_burn_charges_idle_and_movement() {
    let params = Params::default();
    let mut creature = create_creature(100.0, 100.0, 0, &params);

    metabolism::burn(&mut creature, &vec2(6.0, 8.0), 0.5);
    // 0.5 * (10 * 0.1 + 0.96)
    assert_close(creature.energy(), 20.0 - 0.98);
}

#[test]
fn test_face_follows_velocity_and_resets_when_standing_still() {
    let params = Params::default();
    let mut creature = create_creature(100.0, 100.0, 0, &params);

    metabolism::face(&mut creature, &vec2(0.0, -3.0));
    assert_close(creature.orientation[0], 0.0);
    assert_close(creature.orientation[1], -1.0);

    creature.orientation = vec2(0.0, 1.0);
    metabolism::face(&mut creature, &vec2(0.0, 0.0));
    assert_eq!(creature.orientation, vec2(1.0, 0.0));
}

#[test]
fn test_graze_consumes_plant() {
    let params = Params::default();
    let mut creature = create_creature(100.0, 100.0, 0, &params);
    creature.set_energy(5.0);
    let mut plant = Plant::with_size(vec2(100.0, 100.0), 2.0);

    let gained = metabolism::graze(&mut creature, &mut plant, 3.0);
    assert_close(gained, 6.0);
    assert_close(creature.energy(), 11.0);
    assert_eq!(plant.body.size, 0.0);
    assert!(!plant.body.alive);
}

#[test]
fn test_graze_capped_by_storage() {
    let params = Params::default();
    let mut creature = create_creature(100.0, 100.0, 0, &params);
    creature.set_energy(19.0);
    let mut plant = Plant::with_size(vec2(100.0, 100.0), 2.0);

    let gained = metabolism::graze(&mut creature, &mut plant, 3.0);
    assert_close(gained, 1.0);
    assert_close(creature.energy(), 20.0);
    assert_close(plant.body.size, 2.0 - 1.0 / 3.0);
    assert!(plant.body.alive);
}

#[test]
fn test_graze_rejects_inedible_and_dead_plants() {
    let params = Params::default();
    let mut creature = create_creature(100.0, 100.0, 0, &params);
    creature.set_energy(5.0);

    let mut dead = Plant::with_size(vec2(100.0, 100.0), 2.0);
    dead.body.alive = false;
    assert_eq!(metabolism::graze(&mut creature, &mut dead, 3.0), 0.0);

    creature.traits.diet = 0b10;
    let mut plant = Plant::with_size(vec2(100.0, 100.0), 2.0);
    assert_eq!(metabolism::graze(&mut creature, &mut plant, 3.0), 0.0);
    assert_eq!(plant.body.size, 2.0);
    assert_eq!(creature.energy(), 5.0);
}

#[test]
fn test_starvation() {
    let params = Params::default();
    let mut creature = create_creature(100.0, 100.0, 0, &params);
    creature.set_energy(1.0);

    creature.consume_energy(2.0);
    assert!(creature.is_alive());
    assert!(creature.starve_if_exhausted());
    assert_eq!(creature.energy(), 0.0);
    assert!(!creature.is_alive());
    assert!(!creature.starve_if_exhausted());
}

#[test]
fn test_gain_energy_is_capped() {
    let params = Params::default();
    let mut creature = create_creature(100.0, 100.0, 0, &params);
    creature.set_energy(18.0);

    assert_eq!(creature.gain_energy(5.0), 2.0);
    assert_eq!(creature.energy(), 20.0);
}

#[test]
#[should_panic]
fn test_set_energy_above_storage_panics() {
    let params = Params::default();
    let mut creature = create_creature(100.0, 100.0, 0, &params);
    creature.set_energy(25.0);
}

#[test]
fn test_litter_size_truncates_and_floors_at_zero() {
    let mut rng = SimRng::seed_from_u64(10);
    assert_eq!(reproduction::litter_size(0.9, 0.0, &mut rng), 0);
    assert_eq!(reproduction::litter_size(2.99, 0.0, &mut rng), 2);
    assert_eq!(reproduction::litter_size(-1.0, 0.5, &mut rng), 0);
    for _ in 0..100 {
        let count = reproduction::litter_size(3.0, 1.0, &mut rng);
        assert!((2..=4).contains(&count));
    }
}

#[test]
fn test_reproduction_debits_parent() {
    let params = Params {
        founder_average_offspring: 2.0,
        founder_offspring_offset: 0.0,
        ..still_params()
    };
    let mut rng = SimRng::seed_from_u64(11);
    let mut parent = create_creature(100.0, 100.0, 0, &params);
    parent.since_reproduction = 10.0;

    let litter = reproduction::try_reproduce(&mut parent, &params, &mut rng);

    assert_eq!(litter.len(), 2);
    assert_close(parent.energy(), 20.0 - 2.0 * 7.5);
    assert_eq!(parent.since_reproduction, 0.0);
    for child in &litter {
        assert_eq!(child.body.pos, parent.body.pos);
        assert_eq!(child.energy(), child.traits.energy_storage);
        assert_eq!(child.since_reproduction, 0.0);
        assert!(child.is_alive());
    }
}

#[test]
fn test_reproduction_debit_matches_litter() {
    let params = Params {
        founder_energy_storage: 40.0,
        ..Params::default()
    };
    let mut rng = SimRng::seed_from_u64(12);

    for _ in 0..20 {
        let mut parent = create_creature(100.0, 100.0, 0, &params);
        parent.since_reproduction = 10.0;
        let before = parent.energy();
        let litter = reproduction::try_reproduce(&mut parent, &params, &mut rng);

        assert!((2..=3).contains(&litter.len()));
        assert_close(
            before - parent.energy(),
            litter.len() as f32 * parent.energy_per_offspring(),
        );
    }
}

#[test]
fn test_no_reproduction_without_energy() {
    let params = Params::default();
    let mut rng = SimRng::seed_from_u64(13);
    let mut parent = create_creature(100.0, 100.0, 0, &params);
    parent.since_reproduction = 10.0;
    parent.set_energy(1.0);

    let litter = reproduction::try_reproduce(&mut parent, &params, &mut rng);

    assert!(litter.is_empty());
    assert_eq!(parent.energy(), 1.0);
    assert_eq!(parent.since_reproduction, 10.0);
}

#[test]
fn test_no_reproduction_during_cooldown() {
    let params = Params::default();
    let mut rng = SimRng::seed_from_u64(14);
    let mut parent = create_creature(100.0, 100.0, 0, &params);
    parent.since_reproduction = 5.0;

    assert!(!reproduction::is_ready(&parent));
    assert!(reproduction::try_reproduce(&mut parent, &params, &mut rng).is_empty());
    assert_eq!(parent.energy(), 20.0);

    reproduction::advance_cooldown(&mut parent, 5.0);
    assert!(reproduction::is_ready(&parent));
}

#[test]
fn test_offspring_without_mutation_is_a_clone() {
    let params = still_params();
    let mut rng = SimRng::seed_from_u64(15);
    let mut parent = create_creature(100.0, 100.0, 0b1010, &params);
    parent.orientation = vec2(0.0, 1.0);
    parent.set_energy(3.0);

    let child = parent.offspring(&params, &mut rng);

    assert_eq!(child.traits, parent.traits);
    assert_eq!(child.body.gene, parent.body.gene);
    assert_eq!(child.body.size, parent.body.size);
    assert_eq!(child.body.pos, parent.body.pos);
    assert_eq!(child.orientation, parent.orientation);
    assert_eq!(Brain::distance(child.brain(), parent.brain()), 0.0);
    assert_eq!(child.energy(), 20.0);
}

#[test]
fn test_vision_traits_only_evolve_when_enabled() {
    let params = Params {
        trait_mutation_chance: 1.0,
        ..Params::default()
    };
    let mut rng = SimRng::seed_from_u64(16);
    let parent = Traits::founder(&params, &mut rng);

    let child = parent.inherit(&params, &mut rng);
    assert_eq!(child.vision_angle, parent.vision_angle);
    assert_eq!(child.vision_distance, parent.vision_distance);
    assert!((child.speed - parent.speed).abs() <= parent.speed * 0.1 + 1e-4);

    let evolving = Params {
        evolve_vision: true,
        ..params
    };
    let child = parent.inherit(&evolving, &mut rng);
    assert!((child.vision_distance - parent.vision_distance).abs() <= 1.0 + 1e-4);
}

#[test]
fn test_diet_and_gene_mutation() {
    assert!(genetics::diet_accepts(PRODUCER_GENE, 0b11));
    assert!(!genetics::diet_accepts(0b10, PRODUCER_GENE));

    let mut rng = SimRng::seed_from_u64(17);
    assert_eq!(genetics::mutate_gene(0b1010, 0.0, &mut rng), 0b1010);
    assert_eq!(genetics::mutate_gene(0b1010, 1.0, &mut rng), !0b1010);
    assert_eq!(genetics::mutate_color([0, 128, 255], 0.0, 0.5, &mut rng), [0, 128, 255]);
}

#[test]
fn test_fight_stronger_attacker_wins() {
    let params = Params::default();
    let mut attacker = create_creature(100.0, 100.0, 0, &params);
    let mut defender = create_creature(101.0, 101.0, 0, &params);
    attacker.set_energy(10.0);
    defender.set_energy(3.0);
    defender.traits.strength = 0.4;

    // Forces: min(10, 5) = 5 against min(3, 2) = 2
    let outcome = combat::attempt_attack(&mut attacker, &mut defender);

    assert_eq!(outcome, Some(FightOutcome::AttackerWon));
    assert!(!defender.is_alive());
    assert!(attacker.is_alive());
    assert_close(attacker.energy(), 11.0);
}

#[test]
fn test_fight_weaker_attacker_loses() {
    let params = Params::default();
    let mut attacker = create_creature(100.0, 100.0, 0, &params);
    let mut defender = create_creature(100.0, 100.0, 0, &params);
    attacker.set_energy(2.0);
    defender.set_energy(10.0);

    let outcome = combat::attempt_attack(&mut attacker, &mut defender);

    assert_eq!(outcome, Some(FightOutcome::DefenderWon));
    assert!(!attacker.is_alive());
    assert_close(defender.energy(), 10.0);
}

#[test]
fn test_fight_tie_changes_nothing() {
    let params = Params::default();
    let mut attacker = create_creature(100.0, 100.0, 0, &params);
    let mut defender = create_creature(100.0, 100.0, 0, &params);

    assert_eq!(combat::attempt_attack(&mut attacker, &mut defender), None);
    assert!(attacker.is_alive() && defender.is_alive());
    assert_eq!(attacker.energy(), 20.0);
    assert_eq!(defender.energy(), 20.0);
}

#[test]
fn test_fight_requires_range_and_life() {
    let params = Params::default();
    let mut attacker = create_creature(100.0, 100.0, 0, &params);
    let mut far = create_creature(103.0, 100.0, 0, &params);
    far.set_energy(1.0);

    // Squared distance 9 exceeds the attacker radius of 5
    assert!(!combat::in_range(&attacker, &far));
    assert_eq!(combat::attempt_attack(&mut attacker, &mut far), None);
    assert!(far.is_alive());

    let mut dead = create_creature(100.0, 100.0, 0, &params);
    dead.set_energy(1.0);
    dead.kill();
    assert_eq!(combat::attempt_attack(&mut attacker, &mut dead), None);
    assert_eq!(attacker.energy(), 20.0);
}

#[test]
fn test_fight_gain_capped_at_storage() {
    let params = Params::default();
    let mut attacker = create_creature(100.0, 100.0, 0, &params);
    let mut defender = create_creature(100.0, 100.0, 0, &params);
    attacker.set_energy(19.5);
    defender.set_energy(3.0);
    defender.traits.strength = 0.4;

    combat::resolve(&mut attacker, &mut defender);
    assert_eq!(attacker.energy(), 20.0);
}
