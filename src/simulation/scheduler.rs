//! Frame-driven scheduling of world steps.

use std::time::Instant;

use tracing::info;

use super::params::{Params, ParamsError};
use super::render::{Frame, Renderer};
use super::world::World;

/// Longest simulated time a single tick may cover, absorbing frame hitches.
pub const MAX_DT: f32 = 1.0;

/// Converts wall-clock seconds into a capped simulated time step.
pub fn frame_dt(wall_delta: f32, time_speed: f32) -> f32 {
    (wall_delta * time_speed).min(MAX_DT)
}

/// Owns the world and drives it one step per host frame.
#[derive(Debug)]
pub struct Scheduler<R: Renderer> {
    world: World,
    renderer: R,
    last_tick: Instant,
}

impl<R: Renderer> Scheduler<R> {
    /// Wraps a world and a renderer. The wall clock starts now.
    pub fn new(world: World, renderer: R) -> Self {
        Self {
            world,
            renderer,
            last_tick: Instant::now(),
        }
    }

    /// Builds the world from `params` and wraps it.
    pub fn from_params(params: Params, renderer: R) -> Result<Self, ParamsError> {
        Ok(Self::new(World::new(params)?, renderer))
    }

    /// Runs one tick covering the wall time elapsed since the previous one.
    ///
    /// # Returns
    ///
    /// Whether the host should keep ticking.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        let wall_delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.tick_with_delta(wall_delta)
    }

    /// Runs one tick covering `wall_delta` wall-clock seconds.
    ///
    /// # Panics
    ///
    /// If `wall_delta` is negative or not finite.
    pub fn tick_with_delta(&mut self, wall_delta: f32) -> bool {
        assert!(
            wall_delta.is_finite() && wall_delta >= 0.0,
            "invalid wall delta {wall_delta}"
        );
        let dt = frame_dt(wall_delta, self.world.params().time_speed);
        let stats = self.world.step(dt);

        let frame = Frame::new(&self.world, stats, dt);
        self.renderer.render(&frame);
        self.renderer.is_open()
    }

    /// The simulated world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The simulated world, mutably.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Releases every entity and hands the renderer back.
    pub fn shutdown(mut self) -> R {
        let totals = *self.world.totals();
        info!(
            steps = self.world.steps(),
            time = self.world.time(),
            plants = self.world.plant_count(),
            creatures = self.world.creature_count(),
            births = totals.births,
            starved = totals.starved,
            killed = totals.killed_in_combat,
            "simulation shut down"
        );
        self.world.clear();
        self.renderer
    }
}
