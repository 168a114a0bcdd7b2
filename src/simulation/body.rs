//! State shared by every thing that occupies world space.

use ndarray::Array1;
use serde::Serialize;

use super::genetics::Gene;
use super::geometric_utils::squared_distance;

/// Position, radius, genetic tag and liveness of a plant or creature.
#[derive(Debug, Clone, Serialize)]
pub struct Body {
    /// Position in 2D space, always inside the world box.
    pub pos: Array1<f32>,
    /// Radius used for collision, visibility and rendering.
    pub size: f32,
    /// Genetic tag matched against diets.
    pub gene: Gene,
    /// Cleared when the thing dies; dead things are culled at the end of the step.
    pub alive: bool,
}

impl Body {
    /// Creates a live body.
    pub fn new(pos: Array1<f32>, size: f32, gene: Gene) -> Self {
        Self {
            pos,
            size,
            gene,
            alive: true,
        }
    }

    /// Returns `true` when the two discs strictly overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        let reach = self.size + other.size;
        squared_distance(&self.pos, &other.pos) < reach * reach
    }
}
