//! Hsv - hue/saturation/value triple derived from an RGB color.

use super::Rgb;
use serde::{Deserialize, Serialize};

/// An HSV color. Hue is in degrees [0, 360) (0 when achromatic),
/// saturation and value are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Value (brightness).
    pub v: f64,
}

impl Hsv {
    /// Convert an RGB color to HSV.
    ///
    /// An achromatic input (all channels equal) yields hue 0 and
    /// saturation 0; this is a defined result, not an error.
    ///
    /// The hue fraction is wrapped into [0, 1) with a single add or
    /// subtract, not a modulo. The fractions produced by the branch
    /// arithmetic below are bounded to roughly [-1, 4/3], so one step is
    /// always enough; a true modulo would change results for inputs that
    /// cannot occur here.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.red();
        let g = rgb.green();
        let b = rgb.blue();

        let v = r.max(g).max(b);
        let diff = v - r.min(g).min(b);

        if diff == 0.0 {
            return Self { h: 0.0, s: 0.0, v };
        }

        let s = diff / v;
        let f = |c: f64| (v - c) / 6.0 / diff + 0.5;

        let mut h = if r == v {
            f(b) - f(g)
        } else if g == v {
            1.0 / 3.0 + f(r) - f(b)
        } else {
            2.0 / 3.0 + f(g) - f(r)
        };

        if h < 0.0 {
            h += 1.0;
        } else if h > 1.0 {
            h -= 1.0;
        }

        Self { h: h * 360.0, s, v }
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}
