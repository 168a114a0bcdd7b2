//! The world: every plant and creature, and the step that advances them.
//!
//! A step:
//! - Respawns the founder batch if no creature is left
//! - Runs the plant spawn timer
//! - Ticks every live thing once, in index order, including creatures born during the pass
//! - Removes everything that died

use tracing::{debug, info, trace};

use super::creature::{Creature, FightOutcome, combat, metabolism, perception, reproduction};
use super::params::{Params, ParamsError};
use super::plant::Plant;
use super::random::SimRng;
use super::stats::StepStats;
use super::thing::Thing;

/// Index of each controller output.
pub mod output {
    /// Horizontal movement request.
    pub const MOVE_X: usize = 0;
    /// Vertical movement request.
    pub const MOVE_Y: usize = 1;
    /// Reproduce when positive.
    pub const REPRODUCE: usize = 2;
    /// Attack when positive.
    pub const ATTACK: usize = 3;
}

/// The simulated ecosystem.
#[derive(Debug)]
pub struct World {
    things: Vec<Thing>,
    params: Params,
    rng: SimRng,
    time_until_plant_spawn: f32,
    time: f32,
    steps: u64,
    totals: StepStats,
}

impl World {
    /// Creates a world seeded from the operating system.
    pub fn new(params: Params) -> Result<Self, ParamsError> {
        Self::with_rng(params, SimRng::from_entropy())
    }

    /// Creates a reproducible world.
    pub fn with_seed(params: Params, seed: u64) -> Result<Self, ParamsError> {
        Self::with_rng(params, SimRng::seed_from_u64(seed))
    }

    /// Creates a world with the initial plants and creatures.
    pub fn with_rng(params: Params, rng: SimRng) -> Result<Self, ParamsError> {
        params.validate()?;

        let mut world = Self {
            things: Vec::with_capacity(params.n_plant + params.n_creature),
            time_until_plant_spawn: params.plant_spawn_interval,
            params,
            rng,
            time: 0.0,
            steps: 0,
            totals: StepStats::default(),
        };

        for _ in 0..world.params.n_plant {
            world.spawn_plant();
        }
        world.spawn_founders();

        info!(
            plants = world.params.n_plant,
            creatures = world.params.n_creature,
            width = world.params.box_width,
            height = world.params.box_height,
            "world created"
        );
        Ok(world)
    }

    /// Advances the world by `dt` simulated seconds.
    ///
    /// # Panics
    ///
    /// If `dt` is negative or not finite.
    pub fn step(&mut self, dt: f32) -> StepStats {
        assert!(dt.is_finite() && dt >= 0.0, "invalid time step {dt}");
        let mut stats = StepStats::default();

        if self.creature_count() == 0 {
            stats.founders_spawned = self.spawn_founders();
            info!(
                founders = stats.founders_spawned,
                time = self.time,
                "creatures extinct, respawning founders"
            );
        }

        self.time_until_plant_spawn -= dt;
        if self.time_until_plant_spawn <= 0.0 {
            self.time_until_plant_spawn += self.params.plant_spawn_interval;
            self.spawn_plant();
            stats.plants_spawned += 1;
            debug!(time = self.time, "plant spawned");
        }

        // The collection grows while we walk it; newborns get their turn in this pass.
        let mut index = 0;
        while index < self.things.len() {
            if self.things[index].is_alive() {
                if self.things[index].is_plant() {
                    self.tick_plant(index, dt, &mut stats);
                } else {
                    self.tick_creature(index, dt, &mut stats);
                }
            }
            index += 1;
        }

        self.things.retain(Thing::is_alive);

        self.time += dt;
        self.steps += 1;
        self.totals.accumulate(&stats);

        debug!(
            step = self.steps,
            dt,
            plants = self.plant_count(),
            creatures = self.creature_count(),
            births = stats.births,
            deaths = stats.creature_deaths(),
            "step complete"
        );
        stats
    }

    fn tick_plant(&mut self, index: usize, dt: f32, stats: &mut StepStats) {
        let blocked = self.is_blocked(index);
        let growth_rate = self.params.plant_growth_rate;
        if let Some(plant) = self.things[index].as_plant_mut() {
            if plant.tick(dt, growth_rate, blocked) {
                stats.plants_withered += 1;
            }
        }
    }

    /// Whether the plant at `index` overlaps another live plant.
    fn is_blocked(&self, index: usize) -> bool {
        let body = self.things[index].body();
        self.things.iter().enumerate().any(|(other_index, other)| {
            other_index != index
                && other.is_plant()
                && other.is_alive()
                && body.overlaps(other.body())
        })
    }

    fn tick_creature(&mut self, index: usize, dt: f32, stats: &mut StepStats) {
        let seen = perception::perceive(&self.things, index, &self.params, &mut self.rng);

        let Some(creature) = self.things[index].as_creature_mut() else {
            return;
        };
        let outputs = creature.think(&seen.inputs);
        let velocity = metabolism::locomote(
            creature,
            outputs[output::MOVE_X],
            outputs[output::MOVE_Y],
            dt,
            self.params.box_width,
            self.params.box_height,
        );
        reproduction::advance_cooldown(creature, dt);

        if outputs[output::REPRODUCE] > 0.0 {
            let litter = reproduction::try_reproduce(creature, &self.params, &mut self.rng);
            if !litter.is_empty() {
                trace!(parent = index, litter = litter.len(), "litter born");
                stats.births += litter.len();
                self.things.extend(litter.into_iter().map(Thing::Creature));
            }
        }

        if outputs[output::ATTACK] > 0.0 {
            if let Some(target) = seen.target {
                self.fight(index, target, stats);
            }
        }

        let energy_per_size = self.params.plant_energy_per_size;
        let (creature, plant) = match seen.plant {
            Some(plant_index) => {
                let (creature, plant) = pair_mut(&mut self.things, index, plant_index);
                (creature.as_creature_mut(), plant.as_plant_mut())
            }
            None => (self.things[index].as_creature_mut(), None),
        };
        let Some(creature) = creature else {
            return;
        };
        if !creature.is_alive() {
            return;
        }

        metabolism::burn(creature, &velocity, dt);
        if let Some(plant) = plant {
            let was_alive = plant.body.alive;
            metabolism::graze(creature, plant, energy_per_size);
            if was_alive && !plant.body.alive {
                stats.plants_eaten += 1;
            }
        }
        metabolism::face(creature, &velocity);

        if creature.starve_if_exhausted() {
            trace!(creature = index, "starved");
            stats.starved += 1;
        }
    }

    fn fight(&mut self, attacker: usize, defender: usize, stats: &mut StepStats) {
        let (first, second) = pair_mut(&mut self.things, attacker, defender);
        let (Some(attacker_creature), Some(defender_creature)) =
            (first.as_creature_mut(), second.as_creature_mut())
        else {
            return;
        };
        if let Some(outcome) = combat::attempt_attack(attacker_creature, defender_creature) {
            let loser = match outcome {
                FightOutcome::AttackerWon => defender,
                FightOutcome::DefenderWon => attacker,
            };
            trace!(attacker, defender, loser, "fight");
            stats.killed_in_combat += 1;
        }
    }

    /// Adds `count` founder creatures.
    fn spawn_creatures(&mut self, count: usize) {
        for _ in 0..count {
            let creature = Creature::new_random(&self.params, &mut self.rng);
            self.things.push(Thing::Creature(creature));
        }
    }

    /// Adds the configured founder batch and returns its size.
    pub fn spawn_founders(&mut self) -> usize {
        let count = self.params.n_creature;
        self.spawn_creatures(count);
        count
    }

    /// Adds one zero-sized plant at a random position.
    pub fn spawn_plant(&mut self) {
        let plant = Plant::new_random(self.params.box_width, self.params.box_height, &mut self.rng);
        self.things.push(Thing::Plant(plant));
    }

    /// Adds a thing and returns its index.
    pub fn push(&mut self, thing: impl Into<Thing>) -> usize {
        self.things.push(thing.into());
        self.things.len() - 1
    }

    /// Every thing in the world. After a step, all of them are alive.
    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    /// Removes every thing. The next step sees an extinction and respawns the founders.
    pub fn clear(&mut self) {
        self.things.clear();
    }

    /// Number of live creatures.
    pub fn creature_count(&self) -> usize {
        self.things
            .iter()
            .filter(|thing| thing.is_creature() && thing.is_alive())
            .count()
    }

    /// Number of live plants.
    pub fn plant_count(&self) -> usize {
        self.things
            .iter()
            .filter(|thing| thing.is_plant() && thing.is_alive())
            .count()
    }

    /// Simulation parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Simulated seconds elapsed.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Counts accumulated over every step.
    pub fn totals(&self) -> &StepStats {
        &self.totals
    }

    /// Simulated seconds until the next plant spawns.
    pub fn time_until_plant_spawn(&self) -> f32 {
        self.time_until_plant_spawn
    }
}

/// Borrows two distinct elements of a slice mutably.
fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    assert_ne!(first, second, "pair_mut needs two distinct indices");
    if first < second {
        let (head, tail) = items.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}
