//! Creature module containing creature state and behaviour.

#[allow(clippy::module_inception)]
mod creature;
pub mod combat;
pub mod metabolism;
pub mod perception;
pub mod reproduction;
pub mod vision;

// Re-export everything from the creature module
pub use creature::*;

pub use combat::FightOutcome;
pub use metabolism::EnergyCosts;
pub use perception::Perception;
