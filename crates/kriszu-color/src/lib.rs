// SPDX-License-Identifier: MIT
//
// kriszu-color — the color space engine behind the kriszu palettes.
//
// Colors are stored as unrounded sRGB channels on the 0–255 scale, the
// same model the theme's base tokens are written in. Everything else is
// derived on demand:
//
//   hex ↔ RGB (0–255) ↔ HSV (h 0–360, s/v 0–100)
//                     ↔ HSL (h 0–360, s/l 0–100)
//
// Channels stay as f64 through every conversion so that a chain of
// HSV edits does not pick up 8-bit quantization error. Rounding happens
// exactly twice: when a blend writes its result (`darken`/`lighten`) and
// when a color is printed (`to_hex`, `format`).

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/value variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod error;
pub mod format;

pub use color::Color;
pub use error::ColorError;
pub use format::Format;
