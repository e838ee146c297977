//! Color allocation for candidate functions.
//!
//! Each function slot gets a visually distinct hex color for renderers to
//! use. The palette is fixed at nine colors; asking for more is a
//! configuration error raised before any measurement begins.

use crate::error::{Error, Result};

/// Qualitative nine-color palette (ColorBrewer Set1).
const SET1: [&str; 9] = [
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];

/// Largest number of functions the palette can distinguish.
pub const MAX_FUNCTIONS: usize = SET1.len();

/// Allocate `count` visually distinct colors.
///
/// Fails with [`Error::PaletteExhausted`] when `count` exceeds
/// [`MAX_FUNCTIONS`].
pub fn colors(count: usize) -> Result<Vec<&'static str>> {
    if count > MAX_FUNCTIONS {
        return Err(Error::PaletteExhausted {
            requested: count,
            available: MAX_FUNCTIONS,
        });
    }
    Ok(SET1[..count].to_vec())
}
