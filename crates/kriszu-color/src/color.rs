// SPDX-License-Identifier: MIT
//
// The `Color` value and the math that moves it between coordinate systems.
//
// Storage is sRGB on the 0–255 scale with f64 channels. HSV and HSL are
// the classic hexcone models: hue in degrees [0, 360), the other two
// components in percent [0, 100]. Constructors clamp out-of-range input
// instead of rejecting it, so every `Color` that exists is displayable.
//
// Blending is a plain per-channel lerp toward a fixed anchor:
//
//   darken(c, t)  = round(20.5 * t + c * (1 - t))
//   lighten(c, t) = round(255  * t + c * (1 - t))
//
// The dark anchor is a near-black gray (#151515 after rounding), not #000.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::format::Format;

/// Anchor channel value that [`Color::darken`] blends toward.
pub const DARK_ANCHOR: f64 = 20.5;

/// Anchor channel value that [`Color::lighten`] blends toward (pure white).
pub const LIGHT_ANCHOR: f64 = 255.0;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable sRGB color with optional alpha.
///
/// # Examples
///
/// ```
/// use kriszu_color::Color;
///
/// let red = Color::parse_hex("#F53F3F").unwrap();
/// assert_eq!(red.to_hex(), "#f53f3f");
///
/// let (h, s, v) = red.to_hsv();
/// assert!(h < 1.0 && s > 70.0 && v > 95.0);
///
/// assert_eq!(Color::WHITE.darken(0.5).to_hex(), "#8a8a8a");
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Pure black.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, alpha: 1.0 };

    /// Pure white.
    pub const WHITE: Self = Self { r: 255.0, g: 255.0, b: 255.0, alpha: 1.0 };

    /// Create an opaque color from 0–255 channel values (clamped).
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            alpha: 1.0,
        }
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Create a color from HSV.
    ///
    /// - `h`: hue in degrees, normalized into [0, 360)
    /// - `s`: saturation in percent, clamped to [0, 100]
    /// - `v`: value in percent, clamped to [0, 100]
    #[must_use]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = hsv_to_rgb(normalize_hue(h), clamp_percent(s), clamp_percent(v));
        Self::rgb(r, g, b)
    }

    /// Create a color from HSL. Same ranges and clamping as [`Color::from_hsv`].
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = hsl_to_rgb(normalize_hue(h), clamp_percent(s), clamp_percent(l));
        Self::rgb(r, g, b)
    }

    /// Parse a `#RRGGBB` hex string. The `#` is optional, digits are
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] unless the input is
    /// exactly six hex digits after the optional `#`.
    pub fn parse_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorError::InvalidColorFormat(s.to_string()));
        }
        let bytes = digits.as_bytes();
        let channel = |at: usize| {
            parse_hex_byte(&bytes[at..at + 2])
                .ok_or_else(|| ColorError::InvalidColorFormat(s.to_string()))
        };
        Ok(Self::rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parse any CSS hex form: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    ///
    /// Theme tokens use the short and alpha forms; palette base colors go
    /// through the stricter [`Color::parse_hex`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for any other length or a
    /// non-hex digit.
    pub fn from_css_hex(s: &str) -> Result<Self, ColorError> {
        parse_css_hex(s).ok_or_else(|| ColorError::InvalidColorFormat(s.to_string()))
    }

    /// Same color with a different alpha (clamped to 0.0–1.0).
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    // ─── Properties ──────────────────────────────────────────────────────

    /// Alpha in 0.0 (transparent) to 1.0 (opaque).
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// Whether the color is fully opaque.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether all three channels are equal (a gray). Hue is meaningless
    /// for these and reads as 0.
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min < 1e-9
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Unrounded channels on the 0–255 scale.
    #[must_use]
    pub const fn to_rgb(self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    /// Channels rounded to 8 bits.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// `(hue, saturation, value)` in degrees and percent.
    #[must_use]
    pub fn to_hsv(self) -> (f64, f64, f64) {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    /// `(hue, saturation, lightness)` in degrees and percent.
    #[must_use]
    pub fn to_hsl(self) -> (f64, f64, f64) {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Hue in degrees, [0, 360). Identical in HSV and HSL.
    #[must_use]
    pub fn hue(self) -> f64 {
        self.to_hsv().0
    }

    /// HSV saturation in percent.
    #[must_use]
    pub fn saturation_v(self) -> f64 {
        self.to_hsv().1
    }

    /// HSV value in percent.
    #[must_use]
    pub fn value(self) -> f64 {
        self.to_hsv().2
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when alpha < 1.0.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.alpha * 255.0);
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Render the color in one of the output notations.
    #[must_use]
    pub fn format(self, format: Format) -> String {
        format.render(self)
    }

    // ─── Blending ────────────────────────────────────────────────────────

    /// Blend each channel toward [`DARK_ANCHOR`] by `level` (clamped to
    /// 0.0–1.0) and round. `level` 0 is the identity, 1 is the anchor gray.
    #[must_use]
    pub fn darken(self, level: f64) -> Self {
        self.blend_toward(DARK_ANCHOR, level)
    }

    /// Blend each channel toward white by `level` (clamped to 0.0–1.0) and
    /// round.
    #[must_use]
    pub fn lighten(self, level: f64) -> Self {
        self.blend_toward(LIGHT_ANCHOR, level)
    }

    fn blend_toward(self, anchor: f64, level: f64) -> Self {
        let level = level.clamp(0.0, 1.0);
        if level <= 0.0 {
            return self;
        }
        let mix = |c: f64| anchor.mul_add(level, c * (1.0 - level)).round();
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
            alpha: self.alpha,
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::rgb({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::rgba({:.3}, {:.3}, {:.3}, {:.2})",
                self.r, self.g, self.b, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-6;
        (self.r - other.r).abs() < EPS
            && (self.g - other.g).abs() < EPS
            && (self.b - other.b).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
    }
}

impl Default for Color {
    /// Default is opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_css_hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────

/// Normalize a hue angle to [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.0
    if h >= 360.0 { 0.0 } else { h }
}

#[inline]
fn clamp_percent(x: f64) -> f64 {
    x.clamp(0.0, 100.0)
}

#[inline]
fn clamp_channel(x: f64) -> f64 {
    x.clamp(0.0, 255.0)
}

/// Hue in degrees from normalized channels, given their max and spread.
#[inline]
fn hue_of(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sector = if r >= max {
        (g - b) / delta
    } else if g >= max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    normalize_hue(sector * 60.0)
}

fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta <= 0.0 {
        return (0.0, 0.0, max * 100.0);
    }
    let h = hue_of(r, g, b, max, delta);
    (h, delta / max * 100.0, max * 100.0)
}

fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;
    if delta <= 0.0 {
        return (0.0, 0.0, l * 100.0);
    }
    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
    (hue_of(r, g, b, max, delta), s * 100.0, l * 100.0)
}

#[allow(clippy::cast_possible_truncation)]
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = h / 60.0;
    let s = s / 100.0;
    let v = v / 100.0 * 255.0;

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(f - 1.0, 1.0);

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s <= 0.0 {
        let gray = l * 255.0;
        return (gray, gray, gray);
    }

    let hi = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let lo = 2.0f64.mul_add(l, -hi);

    let channel = |offset: f64| {
        let mut t = h + offset;
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let x = if 6.0 * t < 1.0 {
            ((hi - lo) * 6.0).mul_add(t, lo)
        } else if 2.0 * t < 1.0 {
            hi
        } else if 3.0 * t < 2.0 {
            ((hi - lo) * (2.0 / 3.0 - t)).mul_add(6.0, lo)
        } else {
            lo
        };
        x * 255.0
    };

    (channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_css_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            let a = parse_hex_digit(bytes[3])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b).with_alpha(f64::from(a << 4 | a) / 255.0))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = parse_hex_byte(&bytes[6..8])?;
            Some(Color::rgb8(r, g, b).with_alpha(f64::from(a) / 255.0))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Round a 0–255 channel to u8, half away from zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
