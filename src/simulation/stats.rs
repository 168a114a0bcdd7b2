//! Population bookkeeping for one step and for the whole run.

use serde::Serialize;

/// What happened during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepStats {
    /// Creatures born from reproduction.
    pub births: usize,
    /// Founder creatures spawned after an extinction.
    pub founders_spawned: usize,
    /// Creatures that ran out of energy.
    pub starved: usize,
    /// Creatures that lost a fight.
    pub killed_in_combat: usize,
    /// Plants grazed down to nothing.
    pub plants_eaten: usize,
    /// Plants that withered while blocked at zero size.
    pub plants_withered: usize,
    /// Plants spawned by the spawn timer.
    pub plants_spawned: usize,
}

impl StepStats {
    /// Adds another step's counts to these.
    pub fn accumulate(&mut self, other: &StepStats) {
        self.births += other.births;
        self.founders_spawned += other.founders_spawned;
        self.starved += other.starved;
        self.killed_in_combat += other.killed_in_combat;
        self.plants_eaten += other.plants_eaten;
        self.plants_withered += other.plants_withered;
        self.plants_spawned += other.plants_spawned;
    }

    /// Creatures removed during the step.
    pub fn creature_deaths(&self) -> usize {
        self.starved + self.killed_in_combat
    }

    /// Plants removed during the step.
    pub fn plant_deaths(&self) -> usize {
        self.plants_eaten + self.plants_withered
    }
}
