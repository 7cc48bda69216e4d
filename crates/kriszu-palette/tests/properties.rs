//! Property-based tests for palette generation
//!
//! Uses proptest to check the gradient invariants over arbitrary base colors.

use kriszu_palette::{Color, Mode, grade, grade_dark, grade_light, grade_list, ramp_around_base};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// `#rrggbb` strings in mixed case, with and without the `#`.
fn hex_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("#?[0-9a-fA-F]{6}").expect("valid regex")
}

/// Any opaque 8-bit color.
fn color_strategy() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::rgb8(r, g, b))
}

/// Colors with a meaningful hue.
fn chromatic_strategy() -> impl Strategy<Value = Color> {
    color_strategy().prop_filter("achromatic", |c| !c.is_achromatic())
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Light), Just(Mode::Dark)]
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Parsing then printing gives the same digits, lowercased and `#`-prefixed
    #[test]
    fn hex_roundtrip(hex in hex_strategy()) {
        let color = Color::parse_hex(&hex).unwrap();
        let digits = hex.trim_start_matches('#').to_ascii_lowercase();
        prop_assert_eq!(color.to_hex(), format!("#{digits}"));
        prop_assert_eq!(Color::parse_hex(&color.to_hex()).unwrap(), color);
    }

    /// Every index in 1..=10 grades; nothing outside it does
    #[test]
    fn index_range(base in color_strategy(), mode in mode_strategy(), bad in 11usize..1000) {
        for i in 1..=10 {
            prop_assert!(grade(base, i, mode).is_ok());
        }
        prop_assert!(grade(base, 0, mode).is_err());
        prop_assert!(grade(base, bad, mode).is_err());
        prop_assert_eq!(grade_list(base, mode).iter().count(), 10);
    }

    /// Light step 6 recovers the base within one unit per channel
    #[test]
    fn midpoint_recovery(base in color_strategy()) {
        let (r, g, b) = base.to_rgb8();
        let (r6, g6, b6) = grade_light(base, 6).unwrap().to_rgb8();
        prop_assert!(r.abs_diff(r6) <= 1 && g.abs_diff(g6) <= 1 && b.abs_diff(b6) <= 1);
    }

    /// Light-mode value never rises from step 1 to step 10
    #[test]
    fn light_value_is_monotonic(base in color_strategy()) {
        let values: Vec<f64> = grade_list(base, Mode::Light).iter().map(Color::value).collect();
        for pair in values.windows(2) {
            prop_assert!(pair[0] >= pair[1] - 1e-9, "{:?}", values);
        }
    }

    /// Light-mode steps keep the base hue
    #[test]
    fn light_hue_is_invariant(base in chromatic_strategy()) {
        let hue = base.hue();
        for step in grade_list(base, Mode::Light).iter() {
            prop_assert!(hue_distance(step.hue(), hue) < 1e-6, "{} vs {}", step.hue(), hue);
        }
    }

    /// Dark-mode saturation stays in [0, 100]; value comes from the mirrored light step
    #[test]
    fn dark_steps_are_in_range(base in color_strategy()) {
        for i in 1..=10 {
            let dark = grade_dark(base, i).unwrap();
            let s = dark.saturation_v();
            prop_assert!((0.0..=100.0).contains(&s), "step {}: saturation {}", i, s);

            let (r, g, b) = grade_light(base, 11 - i).unwrap().to_rgb8();
            let mirrored = Color::rgb8(r, g, b).value();
            prop_assert!((dark.value() - mirrored).abs() < 1e-6);
        }
    }

    /// Same input, same output
    #[test]
    fn grading_is_deterministic(base in color_strategy(), mode in mode_strategy()) {
        prop_assert_eq!(grade_list(base, mode), grade_list(base, mode));
    }

    /// The ramp centre is the base and its ends are the half blends
    #[test]
    fn ramp_shape(base in color_strategy()) {
        let ramp = ramp_around_base(base);
        prop_assert_eq!(ramp[5], base);
        prop_assert_eq!(ramp[0], base.darken(0.5));
        prop_assert_eq!(ramp[10], base.lighten(0.5));
    }

    /// Blending at level 0 is the identity; at level 1 it reaches the anchor
    #[test]
    fn blend_endpoints(base in color_strategy()) {
        prop_assert_eq!(base.darken(0.0), base);
        prop_assert_eq!(base.lighten(0.0), base);
        prop_assert_eq!(base.lighten(1.0), Color::WHITE);
        prop_assert_eq!(base.darken(1.0).to_hex(), "#151515");
    }
}
