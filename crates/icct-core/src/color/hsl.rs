//! RGB to HSL conversion.

use serde::{Deserialize, Serialize};

use super::normalized_rgb;
use crate::buffer::Bgra;

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Convert `pixel` to HSL. Alpha is ignored.
///
/// ```text
/// L = (Cmax + Cmin) / 2
/// S = D / (1 − |2L − 1|)            (0 when D = 0)
/// H = 60 × ((G − B) / D mod 6)      R is max
///     60 × ((B − R) / D + 2)        G is max
///     60 × ((R − G) / D + 4)        B is max
/// ```
///
/// When two channels share the maximum the first of R, G, B wins.
pub fn to_hsl(pixel: Bgra) -> Hsl {
    let [r, g, b] = normalized_rgb(pixel);
    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;
    let lightness = (c_max + c_min) / 2.0;

    if delta == 0.0 {
        return Hsl {
            hue: 0.0,
            saturation: 0.0,
            lightness: lightness * 100.0,
        };
    }

    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

    let sector = if c_max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if c_max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl {
        hue: wrap_degrees(60.0 * sector),
        saturation: saturation * 100.0,
        lightness: lightness * 100.0,
    }
}

fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{IntoColor, Srgb};

    const EPSILON: f64 = 1e-6;

    fn assert_hsl(actual: Hsl, expected: (f64, f64, f64)) {
        let (h, s, l) = expected;
        assert!(
            (actual.hue - h).abs() < 0.05
                && (actual.saturation - s).abs() < 0.05
                && (actual.lightness - l).abs() < 0.05,
            "expected ({h}, {s}, {l}), got {actual:?}"
        );
    }

    #[test]
    fn test_black_is_zero() {
        let hsl = to_hsl(Bgra::new(0, 0, 0, 255));
        assert_eq!(
            hsl,
            Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness: 0.0
            }
        );
    }

    #[test]
    fn test_white_has_full_lightness() {
        let hsl = to_hsl(Bgra::new(255, 255, 255, 255));
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 0.0);
        assert!((hsl.lightness - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_primaries() {
        assert_hsl(to_hsl(Bgra::new(0, 0, 255, 255)), (0.0, 100.0, 50.0));
        assert_hsl(to_hsl(Bgra::new(0, 255, 0, 255)), (120.0, 100.0, 50.0));
        assert_hsl(to_hsl(Bgra::new(255, 0, 0, 255)), (240.0, 100.0, 50.0));
    }

    #[test]
    fn test_dark_red_pixel() {
        // R=200, G=20, B=10
        assert_hsl(to_hsl(Bgra::new(10, 20, 200, 255)), (3.158, 90.476, 41.176));
    }

    #[test]
    fn test_red_max_with_blue_above_green_wraps_hue() {
        // R=200, G=10, B=20: (G − B) / D is negative and must wrap below 360.
        let hsl = to_hsl(Bgra::new(20, 10, 200, 255));
        assert_hsl(hsl, (356.842, 90.476, 41.176));
    }

    #[test]
    fn test_tie_between_red_and_green_uses_red_branch() {
        // Yellow: R == G == max. Red branch gives (G − B) / D = 1 → 60°.
        assert_hsl(to_hsl(Bgra::new(0, 255, 255, 255)), (60.0, 100.0, 50.0));
    }

    #[test]
    fn test_alpha_does_not_affect_result() {
        assert_eq!(
            to_hsl(Bgra::new(30, 60, 90, 0)),
            to_hsl(Bgra::new(30, 60, 90, 255))
        );
    }

    #[test]
    fn test_hue_always_in_range() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(17) {
                    let hsl = to_hsl(Bgra::new(b, g, r, 255));
                    assert!((0.0..360.0).contains(&hsl.hue), "{r},{g},{b}: {hsl:?}");
                    assert!(hsl.saturation.is_finite() && hsl.saturation <= 100.0 + EPSILON);
                    assert!((0.0..=100.0 + EPSILON).contains(&hsl.lightness));
                }
            }
        }
    }

    #[test]
    fn test_matches_palette_on_chromatic_pixels() {
        for r in (0..=255u8).step_by(51) {
            for g in (0..=255u8).step_by(51) {
                for b in (0..=255u8).step_by(51) {
                    if r == g && g == b {
                        continue;
                    }
                    let ours = to_hsl(Bgra::new(b, g, r, 255));
                    let oracle: palette::Hsl<palette::encoding::Srgb, f64> = Srgb::new(
                        f64::from(r) / 255.0,
                        f64::from(g) / 255.0,
                        f64::from(b) / 255.0,
                    )
                    .into_color();

                    let hue_diff = (ours.hue - oracle.hue.into_positive_degrees()).abs();
                    assert!(
                        hue_diff < EPSILON || (hue_diff - 360.0).abs() < EPSILON,
                        "hue mismatch at {r},{g},{b}: {ours:?} vs {oracle:?}"
                    );
                    assert!((ours.saturation - oracle.saturation * 100.0).abs() < EPSILON);
                    assert!((ours.lightness - oracle.lightness * 100.0).abs() < EPSILON);
                }
            }
        }
    }
}
