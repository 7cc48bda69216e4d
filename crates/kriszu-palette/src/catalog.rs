//! Named palettes — the catalog the theme writer reads from.
//!
//! A [`PaletteCatalog`] maps a semantic name (`red`, `blue`, `gray`, …) to
//! a [`Palette`] holding both mode gradients. It is built once, explicitly,
//! from a list of base colors; there is no global instance.

use std::collections::BTreeMap;

use kriszu_color::Color;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PaletteError, Result};
use crate::grade::{Mode, grade_list};
use crate::gradient::Gradient;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Both gradients for one named color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Gradient for light backgrounds.
    pub light: Gradient,
    /// Gradient for dark backgrounds.
    pub dark: Gradient,
    /// The color the palette is named after.
    pub primary: Color,
}

impl Palette {
    /// Grade `base` in both modes.
    #[must_use]
    pub fn from_base(base: Color) -> Self {
        Self {
            light: grade_list(base, Mode::Light),
            dark: grade_list(base, Mode::Dark),
            primary: base,
        }
    }

    /// A hand-tuned gradient used unchanged for both modes.
    #[must_use]
    pub const fn literal(gradient: Gradient) -> Self {
        Self {
            light: gradient,
            dark: gradient,
            primary: gradient.primary(),
        }
    }

    /// The gradient for `mode`.
    #[must_use]
    pub const fn gradient(&self, mode: Mode) -> &Gradient {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

// ---------------------------------------------------------------------------
// PaletteCatalog
// ---------------------------------------------------------------------------

/// Palettes by name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteCatalog {
    entries: BTreeMap<String, Palette>,
}

/// Grade every `(name, #rrggbb)` pair into a catalog.
///
/// All or nothing: the first base color that fails to parse fails the
/// whole build. A repeated name keeps the last entry.
///
/// # Errors
///
/// [`PaletteError::Color`] for the first malformed base color.
pub fn build_palette_catalog<I, K, V>(base_colors: I) -> Result<PaletteCatalog>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    let mut catalog = PaletteCatalog::new();
    for (name, hex) in base_colors {
        let name = name.into();
        let base = Color::parse_hex(hex.as_ref())?;
        debug!(%name, %base, "grading palette");
        catalog.insert(name, Palette::from_base(base));
    }
    Ok(catalog)
}

impl PaletteCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a palette.
    pub fn insert(&mut self, name: impl Into<String>, palette: Palette) {
        let name = name.into();
        if self.entries.insert(name.clone(), palette).is_some() {
            debug!(%name, "replaced palette");
        }
    }

    /// Add a hand-tuned gradient under `name`, bypassing generation.
    /// The primary is its step 6.
    pub fn insert_literal(&mut self, name: impl Into<String>, gradient: Gradient) {
        self.insert(name, Palette::literal(gradient));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.entries.get(name)
    }

    /// Like [`PaletteCatalog::get`], but an error for unknown names.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownPalette`] if there is no entry `name`.
    pub fn require(&self, name: &str) -> Result<&Palette> {
        self.get(name)
            .ok_or_else(|| PaletteError::UnknownPalette(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Palette)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry's gradient for `mode`, plus black and white swatches.
    #[must_use]
    pub fn mode_palette(&self, mode: Mode) -> ModePalette {
        ModePalette {
            mode,
            black: Color::BLACK,
            white: Color::WHITE,
            gradients: self
                .entries
                .iter()
                .map(|(name, palette)| (name.clone(), *palette.gradient(mode)))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// ModePalette
// ---------------------------------------------------------------------------

/// The catalog flattened to one mode, as a theme file consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModePalette {
    pub mode: Mode,
    pub black: Color,
    pub white: Color,
    pub gradients: BTreeMap<String, Gradient>,
}

impl ModePalette {
    /// Step `index` of the gradient called `name`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownPalette`] for an unknown name,
    /// [`PaletteError::IndexOutOfRange`] for an index outside 1..=10.
    pub fn get(&self, name: &str, index: usize) -> Result<Color> {
        self.gradients
            .get(name)
            .ok_or_else(|| PaletteError::UnknownPalette(name.to_string()))?
            .get(index)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
