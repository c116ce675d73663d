//! Perceptual distance estimation between two filament colors.
//!
//! Produces the two ingredients of the purge volume: a hue/saturation
//! planar distance and a luminance-driven term. The luminance term is
//! asymmetric: a transition towards a lighter color is penalized much
//! harder than one towards a darker color, and the darkening branch
//! additionally caps the hue/saturation distance by a blend of the two
//! value channels.

use crate::config::{
    angle, DARKEN_V_DST_WEIGHT, DARKEN_V_SRC_WEIGHT, HS_DIST_CAP, LUM_DARKEN_FACTOR,
    LUM_LIGHTEN_EXPONENT, LUM_LIGHTEN_FACTOR,
};
use crate::model::{Hsv, Rgb};

/// The two purge-driving distance components for one color transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurgeComponents {
    /// Hue/saturation planar distance, capped (and possibly re-capped by
    /// the darkening branch).
    pub hs_dist: f64,
    /// Luminance-driven purge contribution, already scaled to mm³.
    pub lum_purge: f64,
}

/// Estimate the purge-driving distances for a source → destination
/// transition. Not symmetric: swapping the arguments changes which
/// luminance branch is taken.
pub fn estimate(src: Rgb, dst: Rgb) -> PurgeComponents {
    let src_hsv = Hsv::from(src);
    let dst_hsv = Hsv::from(dst);

    let mut hs_dist = delta_hs(src_hsv, dst_hsv);

    let src_lum = src.luminance();
    let dst_lum = dst.luminance();

    let lum_purge = if dst_lum >= src_lum {
        (dst_lum - src_lum).powf(LUM_LIGHTEN_EXPONENT) * LUM_LIGHTEN_FACTOR
    } else {
        // Darkening needs less hue-driven purge: cap the planar distance
        // by a blend of the two value channels
        let inter_v = DARKEN_V_DST_WEIGHT * dst_hsv.v + DARKEN_V_SRC_WEIGHT * src_hsv.v;
        hs_dist = hs_dist.min(inter_v);
        (src_lum - dst_lum) * LUM_DARKEN_FACTOR
    };

    PurgeComponents { hs_dist, lum_purge }
}

/// Euclidean distance between the two colors projected onto the
/// hue/saturation plane, capped at [`HS_DIST_CAP`].
fn delta_hs(src: Hsv, dst: Hsv) -> f64 {
    let src_rad = angle::to_radians(src.h);
    let dst_rad = angle::to_radians(dst.h);
    let dx = src_rad.cos() * src.s * src.v - dst_rad.cos() * dst.s * dst.v;
    let dy = src_rad.sin() * src.s * src.v - dst_rad.sin() * dst.s * dst.v;
    HS_DIST_CAP.min((dx * dx + dy * dy).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // ==================== Planar distance tests ====================

    #[test]
    fn test_delta_hs_identical_is_zero() {
        let hsv = Hsv::from(Rgb::new(10, 200, 60));
        assert!(delta_hs(hsv, hsv).abs() < EPS);
    }

    #[test]
    fn test_delta_hs_capped() {
        // Saturated red vs green are sqrt(3) apart on the plane
        let red = Hsv::from(Rgb::new(255, 0, 0));
        let green = Hsv::from(Rgb::new(0, 255, 0));
        assert!((delta_hs(red, green) - HS_DIST_CAP).abs() < EPS);
    }

    #[test]
    fn test_delta_hs_achromatic_pair_is_zero() {
        // Zero saturation collapses both vectors to the origin
        let black = Hsv::from(Rgb::BLACK);
        let white = Hsv::from(Rgb::new(255, 255, 255));
        assert!(delta_hs(black, white).abs() < EPS);
    }

    // ==================== Luminance branch tests ====================

    #[test]
    fn test_lightening_branch() {
        let c = estimate(Rgb::BLACK, Rgb::new(255, 255, 255));
        // (lum_white - 0)^0.7 * 339, with lum_white a hair under 1.0
        assert!((c.lum_purge - 339.0).abs() < 1e-6);
        assert!(c.hs_dist.abs() < EPS);
    }

    #[test]
    fn test_darkening_branch_smaller() {
        let lighten = estimate(Rgb::new(64, 64, 64), Rgb::new(192, 192, 192));
        let darken = estimate(Rgb::new(192, 192, 192), Rgb::new(64, 64, 64));
        assert!(darken.lum_purge < lighten.lum_purge);
    }

    #[test]
    fn test_darkening_caps_hs_dist() {
        // White to dark saturated blue takes the darkening branch, so
        // hs_dist is bounded by 0.67*v_dst + 0.33*v_src
        let src = Rgb::new(255, 255, 255);
        let dst = Rgb::new(0, 0, 128);
        let c = estimate(src, dst);
        let cap = 0.67 * (128.0 / 255.0) + 0.33;
        assert!(c.hs_dist <= cap + EPS);
    }

    #[test]
    fn test_identical_colors_zero_components() {
        let c = estimate(Rgb::new(255, 128, 0), Rgb::new(255, 128, 0));
        assert!(c.hs_dist.abs() < EPS);
        assert!(c.lum_purge.abs() < EPS);
    }

    #[test]
    fn test_not_symmetric() {
        let a = Rgb::new(219, 81, 130);
        let b = Rgb::new(255, 128, 0);
        assert_ne!(estimate(a, b), estimate(b, a));
    }
}
