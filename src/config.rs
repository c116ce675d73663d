//! Model constants for the purge volume calculation.
//!
//! The numeric values originate from the Bambu Studio flush volume model,
//! tuned to produce good starting values for the Prusa MMU. They are
//! compiled in and never mutated at runtime.

/// Minimum purge volume in mm³. The floor is applied after the multiplier.
pub const MIN_PURGE_VOL: f64 = 65.0;

/// Maximum purge volume in mm³. Hard cap on the final scaled value.
pub const MAX_PURGE_VOL: f64 = 800.0;

/// Included angle (degrees) between the hue/saturation and luminance purge
/// contributions when they are combined as triangle sides.
pub const PURGE_ANGLE_DEG: f64 = 120.0;

/// Upper cap on the hue/saturation planar distance.
pub const HS_DIST_CAP: f64 = 1.2;

/// Scale factor turning the hue/saturation distance into a purge volume.
pub const HS_PURGE_FACTOR: f64 = 137.0;

/// Scale factor for the luminance term on lightening transitions.
pub const LUM_LIGHTEN_FACTOR: f64 = 339.0;

/// Exponent applied to the luminance delta on lightening transitions.
pub const LUM_LIGHTEN_EXPONENT: f64 = 0.7;

/// Scale factor for the luminance term on darkening transitions.
pub const LUM_DARKEN_FACTOR: f64 = 63.0;

/// Weight of the destination value channel in the darkening hs-distance cap.
pub const DARKEN_V_DST_WEIGHT: f64 = 0.67;

/// Weight of the source value channel in the darkening hs-distance cap.
pub const DARKEN_V_SRC_WEIGHT: f64 = 0.33;

/// Perceptual luminance weight for the red channel.
pub const LUM_WEIGHT_R: f64 = 0.3;

/// Perceptual luminance weight for the green channel.
pub const LUM_WEIGHT_G: f64 = 0.59;

/// Perceptual luminance weight for the blue channel.
pub const LUM_WEIGHT_B: f64 = 0.11;

/// Utility functions for angle operations.
pub mod angle {
    /// Convert degrees to radians.
    #[inline]
    pub fn to_radians(degrees: f64) -> f64 {
        degrees * (std::f64::consts::PI / 180.0)
    }
}
