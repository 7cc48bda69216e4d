//! # kriszu-palette — gradient generation for the kriszu themes
//!
//! Turns a handful of named base colors into the palettes the theme
//! writer consumes. Every gradient is a pure function of its base color,
//! so a catalog can be rebuilt at any time and from any thread with the
//! same result.
//!
//! # Architecture
//!
//! ```text
//! base colors (name → #rrggbb)          CatalogConfig (JSON) / builtin
//!     │                                          │
//!     ▼                                          ▼
//! grade.rs:   grade_light / grade_dark   ──►  catalog.rs: PaletteCatalog
//!             (10 indexed steps)                 │   light + dark + primary
//!     │                                          │   + literal gray ramp
//!     ▼                                          ▼
//! gradient.rs: Gradient ([Color; 10])      ModePalette (one mode, plus
//!                                           black/white swatches)
//!
//! ramp.rs:    ramp_around_base (11 steps, accent ramps)
//! token.rs:   TokenTable + Variant fallback (normal / soft / black)
//! ```
//!
//! # Conventions
//!
//! Gradients run lightest (index 1) to darkest (index 10). Index 6 is the
//! primary step: in light mode it is the base color itself. The dark-mode
//! gradient is not an inversion of the light one; it re-derives
//! saturation per step so the same index reads correctly on a dark
//! surface.

// Mathematical code uses small integer-to-float casts (grade indices).
#![allow(clippy::cast_precision_loss)]
// Hue/saturation/value variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod builtin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod grade;
pub mod gradient;
pub mod ramp;
pub mod token;

pub use catalog::{ModePalette, Palette, PaletteCatalog, build_palette_catalog};
pub use config::CatalogConfig;
pub use error::{PaletteError, Result};
pub use grade::{Mode, grade, grade_dark, grade_light, grade_list};
pub use gradient::Gradient;
pub use ramp::ramp_around_base;
pub use token::{TokenColor, TokenTable, Variant};

pub use kriszu_color::{Color, ColorError, Format};
