//! Indexed grading — the palette algorithm proper.
//!
//! A base color becomes ten steps, 1 (lightest) to 10 (darkest), with the
//! base itself at step 6.
//!
//! # Light mode
//!
//! Straight HSV interpolation at a fixed hue. Toward step 1, saturation
//! fades to 9 and value climbs to 100 in five equal steps. Toward step 10,
//! saturation climbs to 100 and value sinks to 30 in four equal steps.
//! Bases already below those floors (saturation <= 9, value <= 30) keep
//! their own value for that component.
//!
//! # Dark mode
//!
//! Step `i` borrows hue and value from light step `11 - i` (read back
//! through its hex form), then gets a saturation of its own:
//!
//! ```text
//! mid      = base_sat - 15   hue in [0, 50)
//!            base_sat - 20   hue in [50, 191)
//!            base_sat - 15   hue in [191, 360)
//! ref      = clamp(mid, 0, 100)
//! up       = ceil((100 - ref) / 5)      per step toward 1
//! down     = ceil((ref - 9) / 4)        per step toward 10
//!
//! sat(i)   = ref + (6 - i) * up         i < 6
//!            mid                        i = 6
//!            ref - (i - 6) * down       i > 6
//! ```
//!
//! Every saturation is clamped to [0, 100] when the color is built.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use kriszu_color::Color;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{PaletteError, Result};
use crate::gradient::{Gradient, PRIMARY_INDEX, STEPS, check_index};

/// Saturation the light side fades toward.
const MIN_SATURATION: f64 = 9.0;
/// Saturation the dark side climbs toward.
const MAX_SATURATION: f64 = 100.0;
/// Value the light side climbs toward.
const MAX_VALUE: f64 = 100.0;
/// Value the dark side sinks toward.
const MIN_VALUE: f64 = 30.0;

/// Steps between the primary and step 1.
const LIGHT_SPAN: f64 = (PRIMARY_INDEX - 1) as f64;
/// Steps between the primary and step 10.
const DARK_SPAN: f64 = (STEPS - PRIMARY_INDEX) as f64;

/// Hue bands for the dark-mode midpoint: `[start, end)` and the saturation
/// taken off the base inside that band.
const MIDPOINT_BANDS: [(f64, f64, f64); 3] = [
    (0.0, 50.0, 15.0),
    (50.0, 191.0, 20.0),
    (191.0, 360.0, 15.0),
];

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which background a gradient is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Light backgrounds: direct interpolation around the base.
    #[default]
    Light,
    /// Dark backgrounds: re-derived saturation per step.
    Dark,
}

impl Mode {
    /// Mode name as accepted by [`Mode::from_str`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Both modes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Light, Self::Dark]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        Self::all()
            .iter()
            .find(|m| m.name() == lower)
            .copied()
            .ok_or_else(|| PaletteError::UnknownMode(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

/// Light-mode step `index` (1..=10) of `base`.
///
/// # Errors
///
/// [`PaletteError::IndexOutOfRange`] if `index` is not in 1..=10.
pub fn grade_light(base: Color, index: usize) -> Result<Color> {
    check_index(index)?;
    Ok(light_step(base, index))
}

/// Dark-mode step `index` (1..=10) of `base`.
///
/// # Errors
///
/// [`PaletteError::IndexOutOfRange`] if `index` is not in 1..=10.
pub fn grade_dark(base: Color, index: usize) -> Result<Color> {
    check_index(index)?;
    Ok(dark_step(base, index))
}

/// Step `index` of `base` in `mode`.
///
/// # Errors
///
/// [`PaletteError::IndexOutOfRange`] if `index` is not in 1..=10.
pub fn grade(base: Color, index: usize, mode: Mode) -> Result<Color> {
    check_index(index)?;
    let color = step_fn(mode)(base, index);
    trace!(%base, index, %mode, graded = %color, "grade");
    Ok(color)
}

/// All ten steps of `base` in `mode`, lightest first.
#[must_use]
pub fn grade_list(base: Color, mode: Mode) -> Gradient {
    let step = step_fn(mode);
    trace!(%base, %mode, "grade list");
    Gradient::new(std::array::from_fn(|i| step(base, i + 1)))
}

fn step_fn(mode: Mode) -> fn(Color, usize) -> Color {
    match mode {
        Mode::Light => light_step,
        Mode::Dark => dark_step,
    }
}

/// Unchecked light step; `index` must be in 1..=10.
fn light_step(base: Color, index: usize) -> Color {
    if index == PRIMARY_INDEX {
        return base;
    }

    let (h, s, v) = base.to_hsv();
    let (s, v) = if index < PRIMARY_INDEX {
        let k = (PRIMARY_INDEX - index) as f64;
        let s = if s <= MIN_SATURATION {
            s
        } else {
            s - (s - MIN_SATURATION) / LIGHT_SPAN * k
        };
        (s, v + (MAX_VALUE - v) / LIGHT_SPAN * k)
    } else {
        let k = (index - PRIMARY_INDEX) as f64;
        let v = if v <= MIN_VALUE {
            v
        } else {
            v - (v - MIN_VALUE) / DARK_SPAN * k
        };
        (s + (MAX_SATURATION - s) / DARK_SPAN * k, v)
    };

    Color::from_hsv(h, s, v)
}

/// Unchecked dark step; `index` must be in 1..=10.
fn dark_step(base: Color, index: usize) -> Color {
    let reference = quantize(light_step(base, STEPS + 1 - index));

    let (base_hue, base_sat, _) = base.to_hsv();
    let midpoint = midpoint_saturation(base_hue, base_sat);
    let ref_sat = midpoint.clamp(0.0, 100.0);

    let up = ((MAX_SATURATION - ref_sat) / LIGHT_SPAN).ceil();
    let down = ((ref_sat - MIN_SATURATION) / DARK_SPAN).ceil();

    let saturation = match index.cmp(&PRIMARY_INDEX) {
        Ordering::Less => (PRIMARY_INDEX - index) as f64 * up + ref_sat,
        Ordering::Equal => midpoint,
        Ordering::Greater => ref_sat - (index - PRIMARY_INDEX) as f64 * down,
    };

    let (h, _, v) = reference.to_hsv();
    Color::from_hsv(h, saturation, v)
}

/// Saturation of dark step 6, before clamping.
fn midpoint_saturation(hue: f64, saturation: f64) -> f64 {
    let offset = MIDPOINT_BANDS
        .iter()
        .find(|(start, end, _)| (*start..*end).contains(&hue))
        .map_or(15.0, |&(_, _, offset)| offset);
    saturation - offset
}

/// Round-trip through 8-bit channels, as a hex string would.
fn quantize(color: Color) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::rgb8(r, g, b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::parse_hex(s).unwrap()
    }

    fn red() -> Color {
        hex("#F53F3F")
    }

    fn assert_rgb8_close(actual: Color, expected: &str) {
        let (ar, ag, ab) = actual.to_rgb8();
        let (er, eg, eb) = hex(expected).to_rgb8();
        assert!(
            ar.abs_diff(er) <= 1 && ag.abs_diff(eg) <= 1 && ab.abs_diff(eb) <= 1,
            "got {actual}, expected {expected}"
        );
    }

    // ── Light mode ──────────────────────────────────────────────────

    #[test]
    fn light_red_steps() {
        let expected = [
            "#ffe8e8", "#fdc5c5", "#fba3a3", "#f98181", "#f76060",
            "#f53f3f", "#cb2727", "#a11515", "#770808",
        ];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(grade_light(red(), i + 1).unwrap().to_hex(), *want, "step {}", i + 1);
        }
        // Step 10 sits on a half-channel boundary (value 30% → 76.5).
        assert_rgb8_close(grade_light(red(), 10).unwrap(), "#4d0000");
    }

    #[test]
    fn light_primary_is_base() {
        for s in ["#F53F3F", "#165DFF", "#00B42A", "#808080"] {
            assert_eq!(grade_light(hex(s), 6).unwrap(), hex(s));
        }
    }

    #[test]
    fn light_endpoints() {
        let (_, s1, v1) = grade_light(red(), 1).unwrap().to_hsv();
        assert!(approx_eq(s1, 9.0, 1e-6), "step 1 saturation {s1}");
        assert!(approx_eq(v1, 100.0, 1e-6), "step 1 value {v1}");
        let (_, s10, v10) = grade_light(red(), 10).unwrap().to_hsv();
        assert!(approx_eq(s10, 100.0, 1e-6), "step 10 saturation {s10}");
        assert!(approx_eq(v10, 30.0, 1e-6), "step 10 value {v10}");
    }

    #[test]
    fn light_keeps_low_saturation_and_value() {
        // s = 5 stays 5 on the light side; v = 20 stays 20 on the dark side.
        let base = Color::from_hsv(200.0, 5.0, 20.0);
        let (_, s, _) = grade_light(base, 2).unwrap().to_hsv();
        assert!(approx_eq(s, 5.0, 1e-6), "saturation {s}");
        let (_, _, v) = grade_light(base, 9).unwrap().to_hsv();
        assert!(approx_eq(v, 20.0, 1e-6), "value {v}");
    }

    #[test]
    fn light_hue_is_constant() {
        let base = hex("#165DFF");
        let h = base.hue();
        for i in 1..=10 {
            let step = grade_light(base, i).unwrap();
            assert!(approx_eq(step.hue(), h, 1e-6), "step {i} hue {}", step.hue());
        }
    }

    #[test]
    fn light_value_never_increases() {
        for s in ["#F53F3F", "#FADC19", "#722ED1", "#14C9C9"] {
            let g = grade_list(hex(s), Mode::Light);
            let values: Vec<f64> = g.iter().map(Color::value).collect();
            for pair in values.windows(2) {
                assert!(pair[0] >= pair[1] - 1e-9, "{s}: {values:?}");
            }
        }
    }

    // ── Dark mode ───────────────────────────────────────────────────

    #[test]
    fn dark_red_steps() {
        let expected = [
            "#770606", "#a11616", "#cb2e2e", "#f54e4e", "#f76565",
            "#f98686", "#fba7a7", "#fdcaca", "#ffecec",
        ];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(grade_dark(red(), i + 2).unwrap().to_hex(), *want, "step {}", i + 2);
        }
        assert_rgb8_close(grade_dark(red(), 1).unwrap(), "#4d0000");
    }

    #[test]
    fn dark_borrows_value_from_mirrored_light_step() {
        for i in 1..=10 {
            let dark = grade_dark(red(), i).unwrap();
            let light = quantize(grade_light(red(), 11 - i).unwrap());
            assert!(
                approx_eq(dark.value(), light.value(), 1e-6),
                "step {i}: {} vs {}",
                dark.value(),
                light.value()
            );
        }
    }

    #[test]
    fn dark_midpoint_uses_hue_bands() {
        // red, hue 0: 74.29 - 15
        let s = grade_dark(red(), 6).unwrap().saturation_v();
        assert!(approx_eq(s, 74.285_714 - 15.0, 1e-4), "red {s}");
        // green, hue 134: 100 - 20
        let s = grade_dark(hex("#00B42A"), 6).unwrap().saturation_v();
        assert!(approx_eq(s, 80.0, 1e-4), "green {s}");
        // blue, hue 222: 91.37 - 15
        let s = grade_dark(hex("#165DFF"), 6).unwrap().saturation_v();
        assert!(approx_eq(s, 91.372_549 - 15.0, 1e-4), "blue {s}");
    }

    #[test]
    fn dark_band_edges() {
        assert!(approx_eq(midpoint_saturation(49.99, 50.0), 35.0, 1e-9));
        assert!(approx_eq(midpoint_saturation(50.0, 50.0), 30.0, 1e-9));
        assert!(approx_eq(midpoint_saturation(190.99, 50.0), 30.0, 1e-9));
        assert!(approx_eq(midpoint_saturation(191.0, 50.0), 35.0, 1e-9));
        assert!(approx_eq(midpoint_saturation(359.9, 50.0), 35.0, 1e-9));
    }

    #[test]
    fn dark_saturation_steps() {
        // red: ref = 59.29, up = ceil(40.71 / 5) = 9, down = ceil(50.29 / 4) = 13
        let sat = |i| grade_dark(red(), i).unwrap().saturation_v();
        assert!(approx_eq(sat(5), 59.285_714 + 9.0, 1e-4));
        // 59.29 + 45 overshoots and clamps.
        assert!(approx_eq(sat(1), 100.0, 1e-4));
        assert!(approx_eq(sat(7), 59.285_714 - 13.0, 1e-4));
        assert!(approx_eq(sat(10), 59.285_714 - 52.0, 1e-4));
    }

    #[test]
    fn dark_saturation_is_clamped_high() {
        // mid = 82, up = ceil(18 / 5) = 4, so step 1 asks for 102.
        let base = Color::from_hsv(0.0, 97.0, 100.0);
        let s = grade_dark(base, 1).unwrap().saturation_v();
        assert!(approx_eq(s, 100.0, 1e-6), "saturation {s}");
    }

    #[test]
    fn dark_saturation_is_clamped_low() {
        // Gray: mid = -15, clamped to 0 for the reference and the midpoint.
        let gray = hex("#808080");
        let s = grade_dark(gray, 6).unwrap().saturation_v();
        assert!(approx_eq(s, 0.0, 1e-9), "saturation {s}");
        for i in 1..=10 {
            let s = grade_dark(gray, i).unwrap().saturation_v();
            assert!((0.0..=100.0).contains(&s), "step {i}: {s}");
        }
    }

    #[test]
    fn dark_is_deterministic() {
        let a = grade_list(hex("#722ED1"), Mode::Dark);
        let b = grade_list(hex("#722ED1"), Mode::Dark);
        assert_eq!(a, b);
    }

    // ── Index checking and dispatch ─────────────────────────────────

    #[test]
    fn index_out_of_range() {
        for bad in [0, 11, 100] {
            assert!(matches!(grade_light(red(), bad), Err(PaletteError::IndexOutOfRange(i)) if i == bad));
            assert!(matches!(grade_dark(red(), bad), Err(PaletteError::IndexOutOfRange(i)) if i == bad));
            assert!(matches!(grade(red(), bad, Mode::Light), Err(PaletteError::IndexOutOfRange(_))));
        }
    }

    #[test]
    fn grade_dispatches_on_mode() {
        assert_eq!(grade(red(), 3, Mode::Light).unwrap(), grade_light(red(), 3).unwrap());
        assert_eq!(grade(red(), 3, Mode::Dark).unwrap(), grade_dark(red(), 3).unwrap());
    }

    #[test]
    fn grade_list_matches_single_steps() {
        for mode in Mode::all() {
            let list = grade_list(red(), *mode);
            for i in 1..=10 {
                assert_eq!(list.get(i).unwrap(), grade(red(), i, *mode).unwrap());
            }
        }
    }

    // ── Mode ────────────────────────────────────────────────────────

    #[test]
    fn mode_parses_names() {
        assert_eq!("light".parse::<Mode>().unwrap(), Mode::Light);
        assert_eq!("Dark".parse::<Mode>().unwrap(), Mode::Dark);
        assert!(matches!("dim".parse::<Mode>(), Err(PaletteError::UnknownMode(m)) if m == "dim"));
    }

    #[test]
    fn mode_display_roundtrips() {
        for mode in Mode::all() {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), *mode);
        }
    }
}
