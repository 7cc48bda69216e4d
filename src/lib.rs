//! # kriszu-theme
//!
//! The palette engine behind the Kriszu editor themes. A theme writer hands
//! over one base color and gets back a 10-step gradient for light
//! backgrounds, a separately derived one for dark backgrounds, or a single
//! step of either, printed in the notation the theme file wants.
//!
//! ```
//! use kriszu_theme::{Format, Mode, grade_color, grade_color_list};
//!
//! let step = grade_color("#F53F3F", 1, Mode::Light, Format::Hex).unwrap();
//! assert_eq!(step, "#ffe8e8");
//!
//! let dark = grade_color_list("#F53F3F", Mode::Dark, Format::Rgb).unwrap();
//! assert_eq!(dark[9], "rgb(255, 236, 236)");
//! ```
//!
//! The building blocks live in two member crates, re-exported here:
//! `kriszu-color` (parsing, color spaces, blending) and `kriszu-palette`
//! (grading, ramps, catalogs, theme tokens).

pub use kriszu_color::{Color, ColorError, Format};
pub use kriszu_palette::builtin::{default_catalog, default_tokens};
pub use kriszu_palette::{
    CatalogConfig, Gradient, Mode, ModePalette, Palette, PaletteCatalog, PaletteError, Result,
    TokenColor, TokenTable, Variant, build_palette_catalog, grade, grade_dark, grade_light,
    grade_list, ramp_around_base,
};

use tracing::debug;

/// Both gradients for `base_hex` (a `#rrggbb` string, `#` optional).
///
/// # Errors
///
/// [`PaletteError::Color`] if `base_hex` is not six hex digits.
pub fn generate_palette(base_hex: &str) -> Result<Palette> {
    let base = Color::parse_hex(base_hex)?;
    debug!(%base, "generating palette");
    Ok(Palette::from_base(base))
}

/// Step `index` (1..=10) of `base_hex` in `mode`, rendered in `format`.
///
/// # Errors
///
/// [`PaletteError::Color`] for a malformed base color,
/// [`PaletteError::IndexOutOfRange`] for an index outside 1..=10.
pub fn grade_color(base_hex: &str, index: usize, mode: Mode, format: Format) -> Result<String> {
    let base = Color::parse_hex(base_hex)?;
    Ok(grade(base, index, mode)?.format(format))
}

/// All ten steps of `base_hex` in `mode`, lightest first, rendered in
/// `format`.
///
/// # Errors
///
/// [`PaletteError::Color`] for a malformed base color.
pub fn grade_color_list(base_hex: &str, mode: Mode, format: Format) -> Result<[String; 10]> {
    let base = Color::parse_hex(base_hex)?;
    Ok(grade_list(base, mode).formatted(format))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    // ── generate_palette ────────────────────────────────────────────

    #[test]
    fn palette_has_both_modes() {
        let p = generate_palette("#F53F3F").unwrap();
        assert_eq!(p.primary.to_hex(), "#f53f3f");
        assert_eq!(p.light.primary().to_hex(), "#f53f3f");
        assert_eq!(p.light.lightest().to_hex(), "#ffe8e8");
        assert_eq!(p.dark.darkest().to_hex(), "#ffecec");
    }

    #[test]
    fn light_step_one_is_lighter_than_step_ten() {
        let p = generate_palette("F53F3F").unwrap();
        assert!(p.light.lightest().value() > p.light.darkest().value());
    }

    #[test]
    fn palette_rejects_bad_hex() {
        for bad in ["", "#F53F3", "#F53F3FF", "red", "#GGGGGG"] {
            let err = generate_palette(bad).unwrap_err();
            assert!(err.is_invalid_color(), "{bad:?}: {err}");
        }
    }

    #[test]
    #[traced_test]
    fn palette_generation_is_logged() {
        generate_palette("#165DFF").unwrap();
        assert!(logs_contain("generating palette"));
        assert!(logs_contain("#165dff"));
    }

    // ── grade_color ─────────────────────────────────────────────────

    #[test]
    fn grade_color_formats() {
        assert_eq!(grade_color("#F53F3F", 6, Mode::Light, Format::Hex).unwrap(), "#f53f3f");
        assert_eq!(
            grade_color("#F53F3F", 6, Mode::Light, Format::Rgb).unwrap(),
            "rgb(245, 63, 63)"
        );
        assert_eq!(
            grade_color("#F53F3F", 6, Mode::Light, Format::Hsl).unwrap(),
            "hsl(0, 90%, 60%)"
        );
        assert_eq!(grade_color("#F53F3F", 3, Mode::Dark, Format::Hex).unwrap(), "#a11616");
    }

    #[test]
    fn grade_color_index_errors() {
        for bad in [0, 11] {
            let err = grade_color("#F53F3F", bad, Mode::Light, Format::Hex).unwrap_err();
            assert!(matches!(err, PaletteError::IndexOutOfRange(i) if i == bad));
        }
    }

    #[test]
    fn bad_color_is_reported_before_bad_index() {
        let err = grade_color("nope", 42, Mode::Dark, Format::Hex).unwrap_err();
        assert!(err.is_invalid_color());
    }

    #[test]
    fn mode_and_format_parse_from_strings() {
        let mode: Mode = "dark".parse().unwrap();
        let format: Format = "rgb".parse().unwrap();
        assert_eq!(grade_color("#F53F3F", 9, mode, format).unwrap(), "rgb(253, 202, 202)");
    }

    // ── grade_color_list ────────────────────────────────────────────

    #[test]
    fn list_matches_single_steps() {
        for mode in Mode::all() {
            for format in Format::all() {
                let list = grade_color_list("#00B42A", *mode, *format).unwrap();
                for (i, s) in list.iter().enumerate() {
                    assert_eq!(*s, grade_color("#00B42A", i + 1, *mode, *format).unwrap());
                }
            }
        }
    }

    #[test]
    fn list_light_red() {
        let list = grade_color_list("#F53F3F", Mode::Light, Format::Hex).unwrap();
        assert_eq!(list[0], "#ffe8e8");
        assert_eq!(list[5], "#f53f3f");
        assert_eq!(list[8], "#770808");
    }

    #[test]
    fn list_rejects_bad_hex() {
        assert!(grade_color_list("#12", Mode::Light, Format::Hex).is_err());
    }

    // ── Re-exports ──────────────────────────────────────────────────

    #[test]
    fn stock_catalog_and_tokens_are_reachable() {
        let catalog = default_catalog().unwrap();
        assert!(catalog.get("magenta").is_some());
        let tokens = default_tokens().unwrap();
        let c = tokens.resolve_token("keyword", Variant::Normal, Mode::Dark).unwrap();
        assert_eq!(c.to_hex(), "#4d9375");
    }
}
