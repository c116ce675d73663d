//! Rgb - 8-bit RGB color triple.

use crate::config::{LUM_WEIGHT_B, LUM_WEIGHT_G, LUM_WEIGHT_R};
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Black, the fallback for unparseable color tokens.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Create a new RGB color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red channel normalized to [0, 1].
    #[inline]
    pub fn red(&self) -> f64 {
        f64::from(self.r) / 255.0
    }

    /// Green channel normalized to [0, 1].
    #[inline]
    pub fn green(&self) -> f64 {
        f64::from(self.g) / 255.0
    }

    /// Blue channel normalized to [0, 1].
    #[inline]
    pub fn blue(&self) -> f64 {
        f64::from(self.b) / 255.0
    }

    /// Perceptual luminance in [0, 1], weighted 0.3/0.59/0.11.
    pub fn luminance(&self) -> f64 {
        self.red() * LUM_WEIGHT_R + self.green() * LUM_WEIGHT_G + self.blue() * LUM_WEIGHT_B
    }

    /// Re-encode as a lowercase `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    // ==================== Luminance tests ====================

    #[test]
    fn test_luminance_black() {
        assert!(approx_eq(Rgb::BLACK.luminance(), 0.0));
    }

    #[test]
    fn test_luminance_pure_red() {
        assert!(approx_eq(Rgb::new(255, 0, 0).luminance(), 0.3));
    }

    #[test]
    fn test_luminance_white_near_one() {
        // 0.3 + 0.59 + 0.11 is not exactly 1.0 in binary floating point
        let lum = Rgb::new(255, 255, 255).luminance();
        assert!(approx_eq(lum, 1.0));
    }

    #[test]
    fn test_luminance_mid_gray() {
        assert!(approx_eq(Rgb::new(128, 128, 128).luminance(), 128.0 / 255.0));
    }

    // ==================== Hex encoding tests ====================

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#ff8000");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_display_matches_hex() {
        assert_eq!(Rgb::new(219, 81, 130).to_string(), "#db5182");
    }
}
