//! Colour picker: everything shown for one sampled pixel.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::buffer::{Bgra, ImageBuffer};
use crate::color::{Cmyk, HexCase, Hsl, to_cmyk, to_hex, to_hex_with_case, to_hsl};
use crate::error::Result;

/// Swatch labels switch from white to black text above this lightness.
const LABEL_LIGHTNESS_THRESHOLD: f64 = 20.0;

/// A sampled pixel in every supported colour model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelReport {
    pub x: u32,
    pub y: u32,
    /// Red, green, blue.
    pub rgb: [u8; 3],
    pub alpha: u8,
    /// Lowercase `#rrggbbaa`.
    pub hex: String,
    pub hsl: Hsl,
    pub cmyk: Cmyk,
}

/// Sample `buffer` at column `x`, row `y`.
pub fn query_pixel(buffer: &ImageBuffer, x: u32, y: u32) -> Result<PixelReport> {
    let pixel = buffer.pixel_checked(x, y)?;
    Ok(PixelReport::from_pixel(x, y, pixel))
}

impl PixelReport {
    pub fn from_pixel(x: u32, y: u32, pixel: Bgra) -> Self {
        Self {
            x,
            y,
            rgb: pixel.rgb(),
            alpha: pixel.alpha(),
            hex: to_hex(pixel),
            hsl: to_hsl(pixel),
            cmyk: to_cmyk(pixel),
        }
    }

    pub fn pixel(&self) -> Bgra {
        let [r, g, b] = self.rgb;
        Bgra::new(b, g, r, self.alpha)
    }

    /// Opaque `#rrggbb` for painting a swatch.
    pub fn swatch(&self) -> &str {
        self.hex.get(..7).unwrap_or(&self.hex)
    }

    /// Text colour that stays readable on top of the swatch.
    pub fn label_color(&self) -> &'static str {
        if self.hsl.lightness > LABEL_LIGHTNESS_THRESHOLD {
            "#000000"
        } else {
            "#ffffff"
        }
    }

    /// Multi-line picker panel with three-digit zero-padded fields.
    pub fn render(&self, case: HexCase) -> String {
        let [r, g, b] = self.rgb;
        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.hsl;
        let Cmyk {
            cyan,
            magenta,
            yellow,
            key,
        } = self.cmyk;

        format!(
            "RGB   : {r:03} {g:03} {b:03}\n\
             HSL   : {} {} {}\n\
             CMYK  : {} {} {} {}\n\
             HEX   : {}\n\
             Alpha : {}",
            field(hue),
            field(saturation),
            field(lightness),
            field(cyan),
            field(magenta),
            field(yellow),
            field(key),
            to_hex_with_case(self.pixel(), case),
            self.alpha,
        )
    }
}

impl fmt::Display for PixelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(HexCase::Upper))
    }
}

/// Truncate toward zero and pad to three digits.
fn field(value: f64) -> String {
    format!("{:03}", value.trunc() as i64)
}
