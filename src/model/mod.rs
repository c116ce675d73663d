//! Color value types for the purge calculation.

mod hsv;
mod rgb;

pub use hsv::Hsv;
pub use rgb::Rgb;
