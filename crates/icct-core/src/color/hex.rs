//! `#RRGGBBAA` formatting and parsing.

use serde::{Deserialize, Serialize};

use crate::buffer::Bgra;
use crate::error::{IcctError, Result};

/// Letter case used for hex digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// Format `pixel` as lowercase `#rrggbbaa`.
pub fn to_hex(pixel: Bgra) -> String {
    to_hex_with_case(pixel, HexCase::Lower)
}

/// Format `pixel` as `#RRGGBBAA`, red first regardless of storage order.
pub fn to_hex_with_case(pixel: Bgra, case: HexCase) -> String {
    let [r, g, b, a] = pixel.to_rgba();
    match case {
        HexCase::Lower => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
        HexCase::Upper => format!("#{r:02X}{g:02X}{b:02X}{a:02X}"),
    }
}

/// Parse `#RRGGBBAA` or `#RRGGBB` (opaque), in either case.
///
/// The leading `#` is optional.
pub fn parse_hex(text: &str) -> Result<Bgra> {
    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !(digits.len() == 6 || digits.len() == 8) || !digits.bytes().all(|c| c.is_ascii_hexdigit())
    {
        return Err(IcctError::InvalidHex(text.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| IcctError::InvalidHex(text.to_string()))
    };

    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if digits.len() == 8 { channel(6)? } else { u8::MAX };

    Ok(Bgra::from_rgba([r, g, b, a]))
}
