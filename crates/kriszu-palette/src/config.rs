//! Catalog configuration: which base colors to grade, and the gray ramp.
//!
//! ```json
//! {
//!   "colors": { "red": "#F53F3F", "blue": "#165DFF" },
//!   "gray": ["#f7f8fa", "#f2f3f5", "…", "#1d2129"]
//! }
//! ```
//!
//! `gray` is optional; without it the catalog has no neutral entry.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builtin::{BASE_COLORS, GRAY, GRAY_RAMP};
use crate::catalog::{PaletteCatalog, build_palette_catalog};
use crate::error::{PaletteError, Result};
use crate::gradient::Gradient;

/// Base colors by name plus an optional literal gray ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    pub colors: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gray: Option<Vec<String>>,
}

impl Default for CatalogConfig {
    /// The stock catalog.
    fn default() -> Self {
        Self {
            colors: BASE_COLORS
                .iter()
                .map(|(name, hex)| ((*name).to_string(), (*hex).to_string()))
                .collect(),
            gray: Some(GRAY_RAMP.iter().map(|s| (*s).to_string()).collect()),
        }
    }
}

impl CatalogConfig {
    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Config`] if the document does not match the schema.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Io`] if the file cannot be read,
    /// [`PaletteError::Config`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        debug!(
            path = %path.display(),
            colors = config.colors.len(),
            gray = config.gray.is_some(),
            "loaded palette config"
        );
        Ok(config)
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Config`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Grade every color and add the gray ramp, if any.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Color`] for a malformed color,
    /// [`PaletteError::GradientLength`] if `gray` is not ten entries.
    pub fn build(&self) -> Result<PaletteCatalog> {
        let mut catalog = build_palette_catalog(&self.colors)?;
        if let Some(gray) = &self.gray {
            catalog.insert_literal(GRAY, Gradient::from_hex_list(gray)?);
        }
        Ok(catalog)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
