//! # Biosphere - Evolving Predator/Prey Ecosystem
//!
//! A closed 2D world of plants and neuro-controlled creatures. Creatures perceive the nearest
//! predator and prey in their vision cone, move, graze, fight and reproduce; offspring inherit
//! a mutated copy of their parent's traits and controller, so behaviour evolves over
//! generations.
//!
//! ## Features
//!
//! - Feed-forward controllers with per-node activation functions and lazy, memoized evaluation
//! - Controller complexity charged as energy upkeep
//! - Gene/diet bitmasks deciding who can eat whom
//! - Vision cone perception with inclusive bounds
//! - Energy-gated litters of mutated clones
//! - Force-based pairwise combat
//! - Read-only frames for an external renderer
//!
//! ## Core Modules
//!
//! - [`simulation::brain`] - Neural controller
//! - [`simulation::creature`] - Creature state, perception, metabolism, reproduction, combat
//! - [`simulation::world`] - Entity collection and the step
//! - [`simulation::scheduler`] - Frame timing and renderer hand-off

/// Core simulation logic and data structures.
pub mod simulation {
    /// State shared by plants and creatures.
    pub mod body;
    /// Neural controller for creatures.
    pub mod brain;
    /// Creature state and behaviour.
    pub mod creature;
    /// Gene masks and heritable trait mutation.
    pub mod genetics;
    /// Geometric utility functions for distance calculations.
    pub mod geometric_utils;
    /// Simulation parameters.
    pub mod params;
    /// Plants that creatures graze on.
    pub mod plant;
    /// Seedable random source.
    pub mod random;
    /// Renderer interface and frame snapshots.
    pub mod render;
    /// Frame-driven scheduling.
    pub mod scheduler;
    /// Per-step statistics.
    pub mod stats;
    /// Tagged plant/creature variant.
    pub mod thing;
    /// The world and its step.
    pub mod world;
}
