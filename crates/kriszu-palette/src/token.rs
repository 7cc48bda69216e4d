//! Semantic theme tokens and their variant overrides.
//!
//! A token is a named role (`keyword`, `background`, `border`, …) with a
//! color per mode. On top of the default table sit two sparse override
//! tables: `soft` (lower-contrast surfaces) and `black` (true-black
//! backgrounds). Lookup walks the chain explicitly:
//!
//! ```text
//! Normal  →  default
//! Soft    →  soft     →  default
//! Black   →  black    →  default
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use kriszu_color::Color;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{PaletteError, Result};
use crate::grade::Mode;

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

/// Which override table a theme reads from first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Normal,
    Soft,
    Black,
}

impl Variant {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Soft => "soft",
            Self::Black => "black",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Normal, Self::Soft, Self::Black]
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        Self::all()
            .iter()
            .find(|v| v.name() == lower)
            .copied()
            .ok_or_else(|| PaletteError::UnknownVariant(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// TokenColor
// ---------------------------------------------------------------------------

/// A token's color: one for both modes, or one per mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenColor {
    Shared(Color),
    Split { dark: Color, light: Color },
}

impl TokenColor {
    /// Parse a `[dark, light]` pair of CSS hex strings.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Color`] if either string is not a CSS hex color.
    pub fn split(dark: &str, light: &str) -> Result<Self> {
        Ok(Self::Split {
            dark: Color::from_css_hex(dark)?,
            light: Color::from_css_hex(light)?,
        })
    }

    /// Parse a single CSS hex string used in both modes.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Color`] if the string is not a CSS hex color.
    pub fn shared(hex: &str) -> Result<Self> {
        Ok(Self::Shared(Color::from_css_hex(hex)?))
    }

    /// The color for `mode`.
    #[must_use]
    pub fn pick(self, mode: Mode) -> Color {
        match (self, mode) {
            (Self::Shared(c), _) | (Self::Split { dark: c, .. }, Mode::Dark) => c,
            (Self::Split { light, .. }, Mode::Light) => light,
        }
    }
}

// ---------------------------------------------------------------------------
// TokenTable
// ---------------------------------------------------------------------------

/// Default token colors plus the soft and black override tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenTable {
    default: BTreeMap<String, TokenColor>,
    soft: BTreeMap<String, TokenColor>,
    black: BTreeMap<String, TokenColor>,
}

impl TokenTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default color for `key`.
    pub fn insert(&mut self, key: impl Into<String>, color: TokenColor) {
        self.default.insert(key.into(), color);
    }

    /// Set the override for `key` under `variant`. [`Variant::Normal`]
    /// writes the default entry.
    pub fn insert_override(&mut self, variant: Variant, key: impl Into<String>, color: TokenColor) {
        self.table_mut(variant).insert(key.into(), color);
    }

    /// Resolve `key` for a variant and mode.
    ///
    /// The variant's own table wins; otherwise the default entry is used.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownToken`] if neither table has `key`.
    pub fn resolve_token(&self, key: &str, variant: Variant, mode: Mode) -> Result<Color> {
        let color = match self.table(variant).get(key) {
            Some(c) => *c,
            None => {
                let c = self
                    .default
                    .get(key)
                    .ok_or_else(|| PaletteError::UnknownToken(key.to_string()))?;
                if variant != Variant::Normal {
                    trace!(key, %variant, "token falls back to default");
                }
                *c
            }
        };
        Ok(color.pick(mode))
    }

    /// Every default key resolved for one variant and mode.
    #[must_use]
    pub fn resolve_all(&self, variant: Variant, mode: Mode) -> BTreeMap<String, Color> {
        self.default
            .iter()
            .map(|(key, default)| {
                let color = self.table(variant).get(key).unwrap_or(default);
                (key.clone(), color.pick(mode))
            })
            .collect()
    }

    /// Default token names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.default.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.default.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.default.is_empty()
    }

    const fn table(&self, variant: Variant) -> &BTreeMap<String, TokenColor> {
        match variant {
            Variant::Normal => &self.default,
            Variant::Soft => &self.soft,
            Variant::Black => &self.black,
        }
    }

    fn table_mut(&mut self, variant: Variant) -> &mut BTreeMap<String, TokenColor> {
        match variant {
            Variant::Normal => &mut self.default,
            Variant::Soft => &mut self.soft,
            Variant::Black => &mut self.black,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
