// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced while reading color input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not a hex color this parser accepts.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// The output notation name is not one of `hex`, `rgb`, `hsl`.
    #[error("unknown color format {0:?} (expected hex, rgb or hsl)")]
    UnknownFormat(String),
}
