//! Property tests over arbitrary channels and hues.

use proptest::prelude::*;
use tincture::prelude::*;
use tincture::{hsv_to_rgb, rgb_to_hsv_exact};

fn channel() -> impl Strategy<Value = u8> {
    any::<u8>()
}

proptest! {
    #[test]
    fn prop_hex_string_is_idempotent(r in channel(), g in channel(), b in channel()) {
        let color = Color::rgb(f64::from(r), f64::from(g), f64::from(b));
        let hex = color.hex_string();
        let reparsed = Color::parse(&hex).unwrap();
        prop_assert_eq!(reparsed.hex_string(), hex);
        prop_assert_eq!(reparsed.to_rgb(), color.to_rgb());
    }

    #[test]
    fn prop_rgb_string_round_trips(r in channel(), g in channel(), b in channel()) {
        let color = Color::rgb(f64::from(r), f64::from(g), f64::from(b));
        let reparsed = Color::parse(&color.rgb_string()).unwrap();
        prop_assert_eq!(reparsed.to_rgb(), color.to_rgb());
    }

    #[test]
    fn prop_exact_hsv_round_trip(r in channel(), g in channel(), b in channel()) {
        let color = Color::rgb(f64::from(r), f64::from(g), f64::from(b));
        prop_assert_eq!(hsv_to_rgb(rgb_to_hsv_exact(color.to_rgb())), color.to_rgb());
    }

    #[test]
    fn prop_normalized_hue_in_range(hue in -1.0e6f64..1.0e6) {
        let wrapped = normalize_hue(hue);
        prop_assert!((0.0..360.0).contains(&wrapped));
        prop_assert!((normalize_hue(wrapped) - wrapped).abs() < 1e-9);
    }

    #[test]
    fn prop_scheme_geometry_for_any_seed(seed in 0u16..360, rng_seed in any::<u64>()) {
        let mut rng = SeededRandom::new(rng_seed);
        let triadic = generate_triadic(f64::from(seed), &mut rng);
        prop_assert_eq!(triadic.relative_hue_list(), vec![120.0, 120.0, 120.0]);
        let complementary = generate_complementary(f64::from(seed), &mut rng);
        prop_assert_eq!(complementary.relative_hue_list(), vec![180.0]);
    }

    #[test]
    fn prop_ramp_contains_base(value in 0u8..=100, count in 0usize..40) {
        let base = Color::hsv(90.0, 50.0, f64::from(value));
        let ramp = Toner::new(base.clone()).generate_set(count);
        prop_assert!(ramp.len() <= count.max(1));
        prop_assert_eq!(ramp.base(), Some(&base));
    }
}
