//! Colour-space conversions for a single picked pixel: HEX, HSL and CMYK.
//!
//! All conversions take a [`Bgra`] pixel and do their math on normalized
//! RGB in `f64`. None of them fail on any 8-bit input.

pub mod cmyk;
pub mod hex;
pub mod hsl;

pub use cmyk::{Cmyk, to_cmyk};
pub use hex::{HexCase, parse_hex, to_hex, to_hex_with_case};
pub use hsl::{Hsl, to_hsl};

use crate::buffer::Bgra;

/// Red, green, blue of `pixel` scaled into `[0, 1]`.
pub(crate) fn normalized_rgb(pixel: Bgra) -> [f64; 3] {
    pixel.rgb().map(|c| f64::from(c) / 255.0)
}
