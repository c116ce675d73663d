//! purge-calc-rs - Estimate filament purge volumes for color changes.
//!
//! When a multi-material 3D printer switches filament colors, old filament
//! must be purged until the new color runs clean. This library estimates
//! the purge volume for a color pair from perceptual color distance: a
//! hue/saturation planar distance and a luminance difference, combined as
//! two triangle sides with a 120° included angle (law of cosines). The
//! model originates from the Bambu Studio flush volume calculation, tuned
//! for the Prusa MMU.
//!
//! # Example
//!
//! ```
//! use purge_calc_rs::compute_purge_volume;
//!
//! let volume = compute_purge_volume("#FF8000", "#DB5182", 1.0);
//! assert_eq!(volume, 110);
//!
//! // Identical colors still cost the minimum purge
//! assert_eq!(compute_purge_volume("#FF8000", "#FF8000", 1.0), 65);
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod matrix;
pub mod model;
pub mod parser;
pub mod volume;

// Re-exports for convenience
pub use error::{PurgeError, Result};
pub use matrix::PurgeMatrix;
pub use model::{Hsv, Rgb};
pub use parser::parse_color;

/// Compute the purge volume in mm³ for a source → destination color
/// change.
///
/// This is the main high-level function; it chains the full pipeline:
/// 1. Parse both color tokens (unparseable tokens fall back to black)
/// 2. Estimate the perceptual distance components
/// 3. Synthesize, scale by `multiplier` and clamp to [65, 800]
///
/// The function is pure and infallible. It is not symmetric in its color
/// arguments: lightening transitions purge more than darkening ones. A
/// zero or negative `multiplier` is not rejected here; it collapses the
/// result to the clamp floor (use [`PurgeMatrix::compute`] for a
/// validating boundary).
pub fn compute_purge_volume(src_color: &str, dst_color: &str, multiplier: f64) -> u32 {
    let src = parser::parse_color(src_color);
    let dst = parser::parse_color(dst_color);

    let components = distance::estimate(src, dst);
    volume::synthesize(&components, multiplier)
}
