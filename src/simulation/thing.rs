//! Anything that occupies world space.

use serde::Serialize;

use super::body::Body;
use super::creature::Creature;
use super::plant::Plant;

/// A plant or a creature.
///
/// Capabilities are dispatched by `match` on the variant.
#[derive(Debug, Clone, Serialize)]
pub enum Thing {
    /// Stationary producer.
    Plant(Plant),
    /// Mobile, neuro-controlled consumer.
    Creature(Creature),
}

impl Thing {
    /// Shared state of the thing.
    pub fn body(&self) -> &Body {
        match self {
            Thing::Plant(plant) => &plant.body,
            Thing::Creature(creature) => &creature.body,
        }
    }

    /// Checks if the thing is alive.
    pub fn is_alive(&self) -> bool {
        self.body().alive
    }

    /// Whether `eater` can eat this thing.
    pub fn is_edible_by(&self, eater: &Creature) -> bool {
        eater.can_eat(self.body())
    }

    /// Whether this thing can eat `prey`. Plants threaten nobody.
    pub fn threatens(&self, prey: &Creature) -> bool {
        match self {
            Thing::Plant(_) => false,
            Thing::Creature(creature) => prey.is_prey_of(creature),
        }
    }

    /// The creature, if this is one.
    pub fn as_creature(&self) -> Option<&Creature> {
        match self {
            Thing::Creature(creature) => Some(creature),
            Thing::Plant(_) => None,
        }
    }

    /// The creature, mutably, if this is one.
    pub fn as_creature_mut(&mut self) -> Option<&mut Creature> {
        match self {
            Thing::Creature(creature) => Some(creature),
            Thing::Plant(_) => None,
        }
    }

    /// The plant, if this is one.
    pub fn as_plant(&self) -> Option<&Plant> {
        match self {
            Thing::Plant(plant) => Some(plant),
            Thing::Creature(_) => None,
        }
    }

    /// The plant, mutably, if this is one.
    pub fn as_plant_mut(&mut self) -> Option<&mut Plant> {
        match self {
            Thing::Plant(plant) => Some(plant),
            Thing::Creature(_) => None,
        }
    }

    /// Whether this is a creature.
    pub fn is_creature(&self) -> bool {
        matches!(self, Thing::Creature(_))
    }

    /// Whether this is a plant.
    pub fn is_plant(&self) -> bool {
        matches!(self, Thing::Plant(_))
    }
}

impl From<Plant> for Thing {
    fn from(plant: Plant) -> Self {
        Thing::Plant(plant)
    }
}

impl From<Creature> for Thing {
    fn from(creature: Creature) -> Self {
        Thing::Creature(creature)
    }
}
