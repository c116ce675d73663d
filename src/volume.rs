//! Volume synthesis: fold the two distance components into one purge
//! volume.
//!
//! The hue/saturation and luminance contributions are treated as two
//! sides of a triangle with a fixed 120° included angle; the third side
//! (law of cosines) is the raw volume. The evaluation order is fixed:
//! multiply by the caller's multiplier, clamp to the floor, clamp to the
//! ceiling, truncate. Reordering these diverges near the bounds.

use crate::config::{angle, HS_PURGE_FACTOR, MAX_PURGE_VOL, MIN_PURGE_VOL, PURGE_ANGLE_DEG};
use crate::distance::PurgeComponents;

/// Combine the distance components into a final purge volume in mm³.
///
/// The floor is applied after the multiplier, so a small multiplier
/// collapses low raw values to [`MIN_PURGE_VOL`] rather than scaling the
/// floor itself; the ceiling caps the already-scaled value.
pub fn synthesize(components: &PurgeComponents, multiplier: f64) -> u32 {
    let hs_purge = HS_PURGE_FACTOR * components.hs_dist;
    let raw = triangle_third_edge(hs_purge, components.lum_purge, PURGE_ANGLE_DEG);

    let scaled = raw * multiplier;
    let floored = scaled.max(MIN_PURGE_VOL);
    floored.min(MAX_PURGE_VOL).trunc() as u32
}

/// Length of the third side of a triangle given two sides and their
/// included angle in degrees.
fn triangle_third_edge(edge_a: f64, edge_b: f64, degree_ab: f64) -> f64 {
    let rad = angle::to_radians(degree_ab);
    (edge_a * edge_a + edge_b * edge_b - 2.0 * edge_a * edge_b * rad.cos()).sqrt()
}
