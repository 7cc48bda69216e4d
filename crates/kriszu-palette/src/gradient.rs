//! The fixed-length gradient type shared by every palette.

use kriszu_color::{Color, Format};
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// Number of steps in a gradient.
pub const STEPS: usize = 10;

/// The canonical "primary" step (1-based).
pub const PRIMARY_INDEX: usize = 6;

/// Ten colors, lightest (index 1) to darkest (index 10).
///
/// The length is part of the type, so a half-built gradient cannot exist.
/// Indexing is 1-based to match how themes name the steps (`red-1` …
/// `red-10`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gradient([Color; STEPS]);

impl Gradient {
    /// Wrap ten colors, ordered lightest first.
    #[must_use]
    pub const fn new(steps: [Color; STEPS]) -> Self {
        Self(steps)
    }

    /// Build a gradient from literal `#rrggbb` strings.
    ///
    /// Used for hand-tuned ramps (the gray scale) that bypass generation.
    ///
    /// # Errors
    ///
    /// [`PaletteError::GradientLength`] unless there are exactly ten
    /// entries; [`PaletteError::Color`] for the first entry that does not
    /// parse.
    pub fn from_hex_list<S: AsRef<str>>(hexes: &[S]) -> Result<Self> {
        if hexes.len() != STEPS {
            return Err(PaletteError::GradientLength(hexes.len()));
        }
        let mut steps = [Color::BLACK; STEPS];
        for (slot, hex) in steps.iter_mut().zip(hexes) {
            *slot = Color::parse_hex(hex.as_ref())?;
        }
        Ok(Self(steps))
    }

    /// The color at 1-based `index`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::IndexOutOfRange`] if `index` is not in 1..=10.
    pub fn get(&self, index: usize) -> Result<Color> {
        check_index(index)?;
        Ok(self.0[index - 1])
    }

    /// Step 6.
    #[must_use]
    pub const fn primary(&self) -> Color {
        self.0[PRIMARY_INDEX - 1]
    }

    /// Step 1.
    #[must_use]
    pub const fn lightest(&self) -> Color {
        self.0[0]
    }

    /// Step 10.
    #[must_use]
    pub const fn darkest(&self) -> Color {
        self.0[STEPS - 1]
    }

    /// The underlying array, lightest first.
    #[must_use]
    pub const fn as_array(&self) -> &[Color; STEPS] {
        &self.0
    }

    /// Iterate lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    /// Render every step in `format`.
    #[must_use]
    pub fn formatted(&self, format: Format) -> [String; STEPS] {
        self.0.map(|c| c.format(format))
    }
}

/// Validate a 1-based grade index.
pub(crate) fn check_index(index: usize) -> Result<()> {
    if (1..=STEPS).contains(&index) {
        Ok(())
    } else {
        Err(PaletteError::IndexOutOfRange(index))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
