//! Whole-image pixel transforms.
//!
//! Every function reads its input buffer and returns a new one of the same
//! shape; inputs are never modified. Arguments are assumed to be within the
//! ranges of the operation table, and results are always saturated into
//! `[0, 255]`.

use crate::buffer::{Bgra, ImageBuffer};
use crate::color::hsl::to_hsl;

/// Target colours lighter than this (HSL lightness, percent) get a black
/// background in [`specific`]; darker ones get white.
pub const SPECIFIC_LIGHTNESS_THRESHOLD: f64 = 17.5;

/// Luma weights for red, green, blue, in thousandths. Integer weights make
/// the floor exact, so grey pixels map to themselves.
const LUMA_MILLI: [u32; 3] = [299, 587, 114];

/// Midpoint contrast pivots around.
const CONTRAST_PIVOT: f64 = 128.0;

/// Apply `f(value, channel_index)` to blue, green, red; keep alpha.
fn map_color_channels(image: &ImageBuffer, f: impl Fn(u8, usize) -> u8) -> ImageBuffer {
    image.map_pixels(|Bgra([b, g, r, a])| Bgra([f(b, 0), f(g, 1), f(r, 2), a]))
}

fn saturate(value: f64) -> u8 {
    // Float-to-int `as` casts truncate toward zero.
    value.clamp(0.0, 255.0) as u8
}

/// Brightness and contrast.
///
/// ```text
/// brightness = brightness_param × 2.55
/// contrast   = 1 + contrast_param / 100
/// out        = clamp(contrast × (in − 128) + 128 + brightness, 0, 255)
/// ```
///
/// Both at 0 leave the image unchanged.
pub fn adjust(image: &ImageBuffer, brightness: i32, contrast: i32) -> ImageBuffer {
    let offset = f64::from(brightness) * 2.55;
    let gain = 1.0 + f64::from(contrast) / 100.0;

    map_color_channels(image, |value, _| {
        saturate(gain * (f64::from(value) - CONTRAST_PIVOT) + CONTRAST_PIVOT + offset)
    })
}

/// Keep pixels whose colour is exactly `(red, green, blue)`; paint every
/// other pixel opaque black, or opaque white when the target is dark.
pub fn specific(image: &ImageBuffer, red: u8, green: u8, blue: u8) -> ImageBuffer {
    let target = [blue, green, red];
    let lightness = to_hsl(Bgra::new(blue, green, red, u8::MAX)).lightness;
    let fill = if lightness > SPECIFIC_LIGHTNESS_THRESHOLD {
        Bgra::new(0, 0, 0, u8::MAX)
    } else {
        Bgra::new(u8::MAX, u8::MAX, u8::MAX, u8::MAX)
    };

    image.map_pixels(|px| {
        let [b, g, r, _] = px.0;
        if [b, g, r] == target { px } else { fill }
    })
}

/// Add a signed offset to each colour channel, saturating at 0 and 255.
pub fn intensity(image: &ImageBuffer, red: i32, green: i32, blue: i32) -> ImageBuffer {
    let deltas = [blue, green, red];
    map_color_channels(image, |value, channel| {
        (i32::from(value) + deltas[channel]).clamp(0, 255) as u8
    })
}

/// Replace colour channels with `floor(0.299 R + 0.587 G + 0.114 B)`.
pub fn greyscale(image: &ImageBuffer) -> ImageBuffer {
    image.map_pixels(|px| {
        let [r, g, b] = px.rgb();
        let luma = LUMA_MILLI[0] * u32::from(r)
            + LUMA_MILLI[1] * u32::from(g)
            + LUMA_MILLI[2] * u32::from(b);
        let grey = (luma / 1000).min(255) as u8;
        Bgra::new(grey, grey, grey, px.alpha())
    })
}

/// `|in − amount|` on every colour channel; alpha unchanged.
///
/// `amount = 255` is the classic negative, `amount = 0` is the identity.
pub fn inverse(image: &ImageBuffer, amount: u8) -> ImageBuffer {
    map_color_channels(image, |value, _| value.abs_diff(amount))
}

/// Zero each colour channel that exceeds its own cap. Channels are judged
/// independently; alpha is unchanged.
pub fn ceiling(image: &ImageBuffer, red: u8, green: u8, blue: u8) -> ImageBuffer {
    let caps = [blue, green, red];
    map_color_channels(image, |value, channel| {
        if value > caps[channel] { 0 } else { value }
    })
}

/// Zero each colour channel that falls below its own floor. Channels are
/// judged independently; alpha is unchanged.
pub fn floor(image: &ImageBuffer, red: u8, green: u8, blue: u8) -> ImageBuffer {
    let floors = [blue, green, red];
    map_color_channels(image, |value, channel| {
        if value < floors[channel] { 0 } else { value }
    })
}
