//! Vision cone test.

use super::super::body::Body;
use super::super::geometric_utils::{angle_between_deg, squared_distance};
use super::Creature;

/// Slack on the range and cone bounds so a target exactly on a boundary is not lost to `f32`
/// rounding in the distance and `acos` computations.
pub const VISION_EPSILON: f32 = 1e-3;

/// Whether `viewer` can see a thing with body `other`.
///
/// A thing is visible when the two bodies overlap, or when it lies within the vision distance
/// (inclusive) and inside the vision cone (inclusive). The cone is widened by the angle the
/// target's radius subtends, so large or close things are easier to spot off-axis.
///
/// # Arguments
///
/// * `viewer` - The looking creature
/// * `other` - Body of the thing being looked at
pub fn can_see(viewer: &Creature, other: &Body) -> bool {
    if viewer.body.overlaps(other) {
        return true;
    }

    let distance_sq = squared_distance(&viewer.body.pos, &other.pos);
    let range = viewer.traits.vision_distance;
    let reach = range + VISION_EPSILON;
    if distance_sq > reach * reach {
        return false;
    }

    let distance = distance_sq.sqrt();
    if distance == 0.0 {
        // Coincident centres of zero-sized bodies: nothing to aim at, treat as in view.
        return true;
    }
    let direction = (&other.pos - &viewer.body.pos) / distance;
    let off_axis = angle_between_deg(&direction, &viewer.orientation);
    let widening = (other.size / distance).atan().to_degrees();

    viewer.traits.vision_angle + VISION_EPSILON >= off_axis - widening
}
