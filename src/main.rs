use std::time::Duration;

use biosphere::simulation::params::Params;
use biosphere::simulation::render::{Frame, Renderer};
use biosphere::simulation::scheduler::Scheduler;
use biosphere::simulation::world::World;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Headless biosphere run that logs population counts.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Plants created at start.
    #[arg(long, default_value_t = 200)]
    plants: usize,
    /// Creatures created at start and after every extinction.
    #[arg(long, default_value_t = 30)]
    creatures: usize,
    /// Simulated seconds between plant spawns.
    #[arg(long, default_value_t = 0.5)]
    spawn_interval: f32,
    /// World width.
    #[arg(long, default_value_t = 1600.0)]
    width: f32,
    /// World height.
    #[arg(long, default_value_t = 900.0)]
    height: f32,
    /// Simulated seconds per wall-clock second.
    #[arg(long, default_value_t = 1.0)]
    time_speed: f32,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// Log a summary every this many ticks.
    #[arg(long, default_value_t = 60)]
    report_every: u64,
    /// Target frame time in milliseconds.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
}

/// Renderer stand-in that logs a summary line instead of drawing.
struct LogRenderer {
    frames: u64,
    max_frames: u64,
    report_every: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        if self.report_every > 0 && self.frames % self.report_every == 0 {
            info!(
                step = frame.step,
                time = frame.time,
                plants = frame.plant_count,
                creatures = frame.creature_count,
                births = frame.stats.births,
                deaths = frame.stats.creature_deaths(),
                plant_deaths = frame.stats.plant_deaths(),
                "frame"
            );
        }
    }

    fn is_open(&self) -> bool {
        self.frames < self.max_frames
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let params = Params {
        n_plant: args.plants,
        n_creature: args.creatures,
        plant_spawn_interval: args.spawn_interval,
        box_width: args.width,
        box_height: args.height,
        time_speed: args.time_speed,
        ..Params::default()
    };

    let world = match args.seed {
        Some(seed) => World::with_seed(params, seed)?,
        None => World::new(params)?,
    };
    let renderer = LogRenderer {
        frames: 0,
        max_frames: args.ticks,
        report_every: args.report_every,
    };

    println!("Starting biosphere simulation");

    let mut scheduler = Scheduler::new(world, renderer);
    let frame_time = Duration::from_millis(args.frame_ms);
    while scheduler.tick() {
        std::thread::sleep(frame_time);
    }
    scheduler.shutdown();

    Ok(())
}
