// SPDX-License-Identifier: MIT
//
// Output notations for colors handed to the theme writer.

use std::fmt;
use std::str::FromStr;

use crate::color::{Color, normalize_hue};
use crate::error::ColorError;

/// The string notation a color is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)` with rounded channels.
    Rgb,
    /// `hsl(h, s%, l%)` with rounded components.
    Hsl,
}

impl Format {
    /// Render `color` in this notation.
    ///
    /// Translucent colors get the `rgba(…)` / `hsla(…)` forms; hex carries
    /// alpha as a fourth byte.
    #[must_use]
    pub fn render(self, color: Color) -> String {
        match self {
            Self::Hex => color.to_hex(),
            Self::Rgb => {
                let (r, g, b) = color.to_rgb8();
                if color.is_opaque() {
                    format!("rgb({r}, {g}, {b})")
                } else {
                    format!("rgba({r}, {g}, {b}, {})", alpha_str(color.alpha()))
                }
            }
            Self::Hsl => {
                let (h, s, l) = color.to_hsl();
                // 359.6 rounds to 360, which is hue 0
                let h = whole(normalize_hue(h.round()));
                let (s, l) = (whole(s), whole(l));
                if color.is_opaque() {
                    format!("hsl({h}, {s}%, {l}%)")
                } else {
                    format!("hsla({h}, {s}%, {l}%, {})", alpha_str(color.alpha()))
                }
            }
        }
    }

    /// Notation name as accepted by [`Format::from_str`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }

    /// All notations.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hex, Self::Rgb, Self::Hsl]
    }
}

/// Round a hue or percentage component for printing.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(x: f64) -> u16 {
    x.round().clamp(0.0, 360.0) as u16
}

/// Alpha with at most two decimals and no trailing zeros.
fn alpha_str(alpha: f64) -> String {
    let s = format!("{:.2}", (alpha * 100.0).round() / 100.0);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::all()
            .iter()
            .find(|f| f.name() == lower)
            .copied()
            .ok_or_else(|| ColorError::UnknownFormat(s.to_string()))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
