//! Error types for palette generation.

use std::path::PathBuf;

use kriszu_color::ColorError;
use thiserror::Error;

/// Everything that can stop a palette from being built.
///
/// Nothing here is retried: a failed color fails its gradient, and a
/// failed gradient fails the catalog.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Malformed color input (also covers unknown output formats).
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Grade index outside 1..=10.
    #[error("grade index {0} out of range (expected 1..=10)")]
    IndexOutOfRange(usize),

    /// Mode name other than `light` / `dark`.
    #[error("unknown palette mode {0:?} (expected light or dark)")]
    UnknownMode(String),

    /// Variant name other than `normal` / `soft` / `black`.
    #[error("unknown theme variant {0:?} (expected normal, soft or black)")]
    UnknownVariant(String),

    /// Token name with no entry in the token table.
    #[error("unknown theme token: {0}")]
    UnknownToken(String),

    /// Palette name with no entry in the catalog.
    #[error("no palette named {0:?}")]
    UnknownPalette(String),

    /// A literal ramp that does not have exactly ten steps.
    #[error("literal gradient must have exactly 10 colors, got {0}")]
    GradientLength(usize),

    /// Reading a config file failed.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config document did not deserialize.
    #[error("invalid palette config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PaletteError {
    /// Whether the error came from malformed color input.
    #[must_use]
    pub const fn is_invalid_color(&self) -> bool {
        matches!(self, Self::Color(ColorError::InvalidColorFormat(_)))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PaletteError>;
