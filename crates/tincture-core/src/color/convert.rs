//! RGB <-> HSV conversion.
//!
//! Channels are 8-bit scale `[0, 255]`; hue is degrees `[0, 360)`; saturation
//! and value are percentages `[0, 100]`.

use super::{Hsv, Rgb};
use crate::hue::{clamp, normalize_hue};

/// Convert HSV to RGB.
///
/// The hue is expected in `[0, 360)`. Output channels are rounded to the
/// nearest integer and clamped to `[0, 255]`.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let hue = hsv.hue;
    let saturation = hsv.saturation / 100.0;
    let value = hsv.value / 100.0;

    let c = value * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

#[inline]
fn to_channel(unit: f64) -> f64 {
    clamp((unit * 255.0).round(), 0.0, 255.0)
}

/// Convert RGB to HSV without rounding.
///
/// Greyscale colors (all channels equal) get hue 0 and saturation 0.
/// Use this when the result feeds another calculation.
pub fn rgb_to_hsv_exact(rgb: Rgb) -> Hsv {
    let red = rgb.red / 255.0;
    let green = rgb.green / 255.0;
    let blue = rgb.blue / 255.0;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let (hue, saturation) = if max == min {
        (0.0, 0.0)
    } else {
        let delta = max - min;
        let sextant = if max == red {
            ((green - blue) / delta) % 6.0
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };
        (sextant * 60.0, delta / max)
    };

    Hsv::new(normalize_hue(hue), saturation * 100.0, max * 100.0)
}

/// Convert RGB to HSV, rounding each component to the nearest integer.
///
/// The rounded hue is wrapped again so a hue such as 359.7 reports 0, never
/// 360.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let exact = rgb_to_hsv_exact(rgb);
    Hsv::new(
        normalize_hue(exact.hue.round()),
        exact.saturation.round(),
        exact.value.round(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [(&str, [f64; 3], [f64; 3]); 16] = [
        ("black", [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        ("white", [255.0, 255.0, 255.0], [0.0, 0.0, 100.0]),
        ("red", [255.0, 0.0, 0.0], [0.0, 100.0, 100.0]),
        ("lime", [0.0, 255.0, 0.0], [120.0, 100.0, 100.0]),
        ("blue", [0.0, 0.0, 255.0], [240.0, 100.0, 100.0]),
        ("yellow", [255.0, 255.0, 0.0], [60.0, 100.0, 100.0]),
        ("cyan", [0.0, 255.0, 255.0], [180.0, 100.0, 100.0]),
        ("magenta", [255.0, 0.0, 255.0], [300.0, 100.0, 100.0]),
        ("silver", [192.0, 192.0, 192.0], [0.0, 0.0, 75.0]),
        ("gray", [128.0, 128.0, 128.0], [0.0, 0.0, 50.0]),
        ("maroon", [128.0, 0.0, 0.0], [0.0, 100.0, 50.0]),
        ("olive", [128.0, 128.0, 0.0], [60.0, 100.0, 50.0]),
        ("green", [0.0, 128.0, 0.0], [120.0, 100.0, 50.0]),
        ("purple", [128.0, 0.0, 128.0], [300.0, 100.0, 50.0]),
        ("teal", [0.0, 128.0, 128.0], [180.0, 100.0, 50.0]),
        ("navy", [0.0, 0.0, 128.0], [240.0, 100.0, 50.0]),
    ];

    #[test]
    fn test_canonical_colors_to_hsv() {
        for (name, [r, g, b], [h, s, v]) in CANONICAL {
            let hsv = rgb_to_hsv(Rgb::new(r, g, b));
            assert_eq!(hsv, Hsv::new(h, s, v), "{name}");
        }
    }

    #[test]
    fn test_canonical_colors_round_trip() {
        for (name, [r, g, b], _) in CANONICAL {
            let rgb = Rgb::new(r, g, b);
            assert_eq!(hsv_to_rgb(rgb_to_hsv_exact(rgb)), rgb, "{name}");
        }
    }

    #[test]
    fn test_hsv_to_rgb_sextants() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 100.0, 100.0)), Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(Hsv::new(60.0, 100.0, 100.0)), Rgb::new(255.0, 255.0, 0.0));
        assert_eq!(hsv_to_rgb(Hsv::new(120.0, 100.0, 50.0)), Rgb::new(0.0, 128.0, 0.0));
        assert_eq!(hsv_to_rgb(Hsv::new(180.0, 100.0, 50.0)), Rgb::new(0.0, 128.0, 128.0));
        assert_eq!(hsv_to_rgb(Hsv::new(240.0, 100.0, 100.0)), Rgb::new(0.0, 0.0, 255.0));
        assert_eq!(hsv_to_rgb(Hsv::new(300.0, 100.0, 50.0)), Rgb::new(128.0, 0.0, 128.0));
    }

    #[test]
    fn test_rgb_to_hsv_reference_values() {
        assert_eq!(rgb_to_hsv(Rgb::new(218.0, 6.0, 18.0)), Hsv::new(357.0, 97.0, 85.0));
        assert_eq!(rgb_to_hsv(Rgb::new(0x1A as f64, 0x2D as f64, 0x86 as f64)), Hsv::new(229.0, 81.0, 53.0));
        assert_eq!(rgb_to_hsv(Rgb::new(192.0, 255.0, 238.0)), Hsv::new(164.0, 25.0, 100.0));
        assert_eq!(rgb_to_hsv(Rgb::new(20.0, 230.0, 180.0)), Hsv::new(166.0, 91.0, 90.0));
    }

    #[test]
    fn test_rounded_hue_never_reaches_full_turn() {
        // exact hue is ~359.76
        let hsv = rgb_to_hsv(Rgb::new(255.0, 0.0, 1.0));
        assert_eq!(hsv.hue, 0.0);
    }

    #[test]
    fn test_greyscale_hue_is_zero() {
        for i in 0..=255 {
            let level = f64::from(i);
            let hsv = rgb_to_hsv(Rgb::new(level, level, level));
            assert_eq!(hsv.hue, 0.0);
            assert_eq!(hsv.saturation, 0.0);
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_rgb_hsv_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let rgb = Rgb::new(f64::from(r), f64::from(g), f64::from(b));
                prop_assert_eq!(hsv_to_rgb(rgb_to_hsv_exact(rgb)), rgb);
            }

            #[test]
            fn prop_rounded_hsv_in_range(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let hsv = rgb_to_hsv(Rgb::new(f64::from(r), f64::from(g), f64::from(b)));
                prop_assert!((0.0..360.0).contains(&hsv.hue));
                prop_assert!((0.0..=100.0).contains(&hsv.saturation));
                prop_assert!((0.0..=100.0).contains(&hsv.value));
            }

            #[test]
            fn prop_greyscale_hue_is_zero(level in 0u8..=255) {
                let l = f64::from(level);
                prop_assert_eq!(rgb_to_hsv(Rgb::new(l, l, l)).hue, 0.0);
            }
        }
    }
}
