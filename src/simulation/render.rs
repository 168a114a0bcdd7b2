//! Read-only hand-off of the world to whatever draws it.
//!
//! The renderer sees one [`Frame`] per tick, after dead things were removed. Nothing in a frame
//! can be used to change the simulation.

use serde::ser::Serializer;
use serde::Serialize;

use super::stats::StepStats;
use super::thing::Thing;
use super::world::World;

/// Color used for every plant.
pub const PLANT_COLOR: [u8; 3] = [0, 200, 0];

/// Consumer of post-tick frames.
pub trait Renderer {
    /// Draws one frame.
    fn render(&mut self, frame: &Frame<'_>);

    /// Whether the host should keep ticking. Checked between ticks only.
    fn is_open(&self) -> bool {
        true
    }
}

/// Kind of a drawn entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A plant.
    Plant,
    /// A creature.
    Creature,
}

/// Everything a renderer needs to draw one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
    /// Plant or creature.
    pub kind: EntityKind,
    /// Position `[x, y]`.
    pub position: [f32; 2],
    /// Radius.
    pub size: f32,
    /// Fill color (RGB).
    pub color: [u8; 3],
    /// Facing direction `[x, y]`; plants have none.
    pub orientation: Option<[f32; 2]>,
}

impl From<&Thing> for EntityView {
    fn from(thing: &Thing) -> Self {
        let body = thing.body();
        let position = [body.pos[0], body.pos[1]];
        match thing {
            Thing::Plant(_) => Self {
                kind: EntityKind::Plant,
                position,
                size: body.size,
                color: PLANT_COLOR,
                orientation: None,
            },
            Thing::Creature(creature) => Self {
                kind: EntityKind::Creature,
                position,
                size: body.size,
                color: creature.traits.color,
                orientation: Some([creature.orientation[0], creature.orientation[1]]),
            },
        }
    }
}

/// Snapshot of the world after one tick.
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    /// Steps taken so far, this one included.
    pub step: u64,
    /// Simulated seconds elapsed.
    pub time: f32,
    /// Simulated seconds covered by this tick.
    pub dt: f32,
    /// Number of plants.
    pub plant_count: usize,
    /// Number of creatures.
    pub creature_count: usize,
    /// What happened during the tick.
    pub stats: StepStats,
    /// Every live thing.
    #[serde(rename = "entities", serialize_with = "serialize_views")]
    pub things: &'a [Thing],
}

impl<'a> Frame<'a> {
    /// Captures the state of `world` after a step.
    pub fn new(world: &'a World, stats: StepStats, dt: f32) -> Self {
        Self {
            step: world.steps(),
            time: world.time(),
            dt,
            plant_count: world.plant_count(),
            creature_count: world.creature_count(),
            stats,
            things: world.things(),
        }
    }

    /// Drawable views of every thing.
    pub fn views(&self) -> impl Iterator<Item = EntityView> + '_ {
        self.things.iter().map(EntityView::from)
    }

    /// Serializes the frame, with entities flattened to [`EntityView`]s.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn serialize_views<S: Serializer>(things: &&[Thing], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(things.iter().map(EntityView::from))
}
