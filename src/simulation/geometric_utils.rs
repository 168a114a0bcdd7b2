//! Geometric utility functions for distance calculations and spatial operations.
//!
//! Positions and directions are 2-element `Array1<f32>` vectors, `[x, y]`.

use ndarray::Array1;

/// Builds a 2D vector.
pub fn vec2(x: f32, y: f32) -> Array1<f32> {
    Array1::from_vec(vec![x, y])
}

/// Dot product of two 2D vectors.
pub fn dot(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    a[0] * b[0] + a[1] * b[1]
}

/// Squared length of a 2D vector.
pub fn length_squared(v: &Array1<f32>) -> f32 {
    dot(v, v)
}

/// Length of a 2D vector.
pub fn length(v: &Array1<f32>) -> f32 {
    length_squared(v).sqrt()
}

/// Squared Euclidean distance between two points.
pub fn squared_distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

/// Shrinks a vector to `max_length` if it is longer, keeping its direction.
///
/// # Arguments
///
/// * `v` - Vector to clamp
/// * `max_length` - Maximum allowed length
///
/// # Returns
///
/// The input unchanged when it already fits, otherwise a rescaled copy.
pub fn clamp_length(v: &Array1<f32>, max_length: f32) -> Array1<f32> {
    let len_sq = length_squared(v);
    if len_sq <= max_length * max_length {
        return v.clone();
    }
    v * (max_length / len_sq.sqrt())
}

/// Returns the unit vector pointing along `v`, or `None` for the zero vector.
pub fn normalized(v: &Array1<f32>) -> Option<Array1<f32>> {
    let len = length(v);
    if len == 0.0 { None } else { Some(v / len) }
}

/// Clamps a position vector into the simulation box `[0, width] x [0, height]`.
///
/// # Arguments
///
/// * `v` - Mutable position vector to clamp
/// * `box_width` - Width of the simulation box
/// * `box_height` - Height of the simulation box
pub fn clamp_into_box_mut(v: &mut Array1<f32>, box_width: f32, box_height: f32) {
    v[0] = v[0].clamp(0.0, box_width);
    v[1] = v[1].clamp(0.0, box_height);
}

/// Angle in degrees between two unit vectors.
///
/// The cosine is clamped to `[-1, 1]` so rounding noise never produces `NaN`.
pub fn angle_between_deg(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    dot(a, b).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Signed offset from `position` to the nearest edge of `[0, extent]`.
///
/// Positions in the lower half report their distance to 0 (positive), positions in the upper
/// half report `position - extent` (negative).
pub fn border_offset(position: f32, extent: f32) -> f32 {
    if position <= extent / 2.0 {
        position
    } else {
        position - extent
    }
}
