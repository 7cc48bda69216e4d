//! The stock catalog and token table the kriszu themes ship with.

use crate::catalog::{PaletteCatalog, build_palette_catalog};
use crate::error::Result;
use crate::gradient::{Gradient, STEPS};
use crate::token::{TokenColor, TokenTable, Variant};

/// Base colors of the stock catalog, in display order.
pub const BASE_COLORS: [(&str, &str); 10] = [
    ("red", "#F53F3F"),
    ("orange", "#FF7D00"),
    ("gold", "#F7BA1E"),
    ("yellow", "#FADC19"),
    ("lime", "#9FDB1D"),
    ("green", "#00B42A"),
    ("cyan", "#14C9C9"),
    ("blue", "#165DFF"),
    ("purple", "#722ED1"),
    ("magenta", "#F5319D"),
];

/// Hand-tuned neutral ramp, lightest first. Used as-is in both modes.
pub const GRAY_RAMP: [&str; STEPS] = [
    "#f7f8fa", "#f2f3f5", "#e5e6eb", "#c9cdd4", "#a9aeb8",
    "#86909c", "#6b7785", "#4e5969", "#272e3b", "#1d2129",
];

/// Name the gray ramp is stored under.
pub const GRAY: &str = "gray";

/// Token colors as `(name, dark, light)`.
const TOKENS: &[(&str, &str, &str)] = &[
    ("primary", "#4d9375", "#1c6b48"),
    ("secondary", "#ff8787", "#f18080"),
    ("foreground", "#dbd7caee", "#393a34"),
    ("activeForeground", "#bfbaaa", "#4e4f47"),
    ("secondaryForeground", "#dedcd590", "#393a3490"),
    ("ignored", "#dedcd550", "#393a3450"),
    ("faded", "#dedcd510", "#393a3410"),
    ("border", "#191919", "#f0f0f0"),
    ("background", "#121212", "#ffffff"),
    ("activeBackground", "#181818", "#f7f7f7"),
    ("selectionBackground", "#eeeeee18", "#22222218"),
    ("selectionBackgroundActive", "#eeeeee18", "#22222218"),
    ("selectionBackgroundInActive", "#eeeeee10", "#22222210"),
    ("variable", "#bd976a", "#b07d48"),
    ("keyword", "#4d9375", "#1e754f"),
    ("number", "#f6c177", "#c7792b"),
    ("constant", "#c77dbb", "#861194"),
    ("parameter", "#a0a5d6", "#6b588e"),
    ("function", "#80a665", "#59873a"),
    ("string", "#c98a7d", "#b56959"),
    ("operator", "#cb7676", "#ab5959"),
    ("comment", "#758575dd", "#a0ada0"),
    ("class", "#6872ab", "#5a6aa6"),
    ("decorators", "#ffffff5f", "#0000005f"),
    ("boolean", "#74ccaa", "#377961"),
    ("interface", "#5d99a9", "#2e808f"),
    ("type", "#5DA994", "#2e8f82"),
    ("builtin", "#cb7676", "#ab5959"),
    ("property", "#b8a965", "#998418"),
    ("namespace", "#db889a", "#b05a78"),
    ("punctuation", "#666666", "#999999"),
    ("decorator", "#bd8f8f", "#bd8f8f"),
    ("regex", "#c4704f", "#ab5e3f"),
    // terminal
    ("black", "#1e1e1e", "#555555"),
    ("white", "#dddddd", "#dddddd"),
    ("green", "#15ac91", "#1e754f"),
    ("cyan", "#5eaab5", "#2993a3"),
    ("blue", "#7098d4", "#7098d4"),
    ("red", "#f14c4c", "#ab5959"),
    ("orange", "#d4976c", "#a65e2b"),
    ("yellow", "#e6cc77", "#bda437"),
    ("magenta", "#d9739f", "#a13865"),
];

const SOFT_TOKENS: &[(&str, &str, &str)] = &[
    ("background", "#222", "#F1F0E9"),
    ("activeBackground", "#292929", "#E7E5DB"),
    ("border", "#252525", "#E7E5DB"),
];

/// Black overrides apply to both modes.
const BLACK_TOKENS: &[(&str, &str)] = &[
    ("foreground", "#dbd7cacc"),
    ("background", "#000"),
    ("activeBackground", "#121212"),
    ("punctuation", "#444444"),
];

/// Build the stock catalog: every [`BASE_COLORS`] entry graded, plus the
/// literal [`GRAY_RAMP`].
///
/// # Errors
///
/// Only if the constants above are malformed.
pub fn default_catalog() -> Result<PaletteCatalog> {
    let mut catalog = build_palette_catalog(BASE_COLORS)?;
    catalog.insert_literal(GRAY, Gradient::from_hex_list(&GRAY_RAMP)?);
    Ok(catalog)
}

/// The stock token table with its soft and black overrides.
///
/// # Errors
///
/// Only if the constants above are malformed.
pub fn default_tokens() -> Result<TokenTable> {
    let mut table = TokenTable::new();
    for (name, dark, light) in TOKENS {
        table.insert(*name, TokenColor::split(dark, light)?);
    }
    for (name, dark, light) in SOFT_TOKENS {
        table.insert_override(Variant::Soft, *name, TokenColor::split(dark, light)?);
    }
    for (name, hex) in BLACK_TOKENS {
        table.insert_override(Variant::Black, *name, TokenColor::shared(hex)?);
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
