//! Pixel and image buffer representation.
//!
//! Pixels are stored in BGRA order, the order produced by the source
//! decoders this tool was built around. All colour math works in RGB order;
//! [`Bgra::rgb`], [`Bgra::from_rgba`] and [`Bgra::to_rgba`] are the only
//! places where channels are reordered.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IcctError, Result};

/// One channel of a BGRA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Blue,
    Green,
    Red,
    Alpha,
}

impl Channel {
    /// The three colour channels, in storage order.
    pub const COLOR: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

    /// Position of this channel inside a [`Bgra`] pixel.
    pub const fn index(self) -> usize {
        match self {
            Self::Blue => 0,
            Self::Green => 1,
            Self::Red => 2,
            Self::Alpha => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single 8-bit pixel in blue, green, red, alpha order.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Bgra(pub [u8; 4]);

impl Bgra {
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self([b, g, r, a])
    }

    /// Build a pixel from RGBA-ordered channels.
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self([rgba[2], rgba[1], rgba[0], rgba[3]])
    }

    /// Channels in RGBA order.
    pub const fn to_rgba(self) -> [u8; 4] {
        let [b, g, r, a] = self.0;
        [r, g, b, a]
    }

    /// Colour channels in RGB order.
    pub const fn rgb(self) -> [u8; 3] {
        let [b, g, r, _] = self.0;
        [r, g, b]
    }

    pub const fn blue(self) -> u8 {
        self.0[0]
    }

    pub const fn green(self) -> u8 {
        self.0[1]
    }

    pub const fn red(self) -> u8 {
        self.0[2]
    }

    pub const fn alpha(self) -> u8 {
        self.0[3]
    }

    pub const fn channel(self, channel: Channel) -> u8 {
        self.0[channel.index()]
    }
}

/// An 8-bit BGRA raster, row-major, `width * height` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Bgra>,
}

impl ImageBuffer {
    /// Wrap an existing pixel vector. Fails if its length does not match
    /// the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<Bgra>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(IcctError::invalid_image(format!(
                "{width}x{height} image needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image where every pixel has the same value.
    pub fn filled(width: u32, height: u32, pixel: Bgra) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Self::new(width, height, vec![pixel; count])
    }

    /// Build from a raw interleaved BGR or BGRA byte array
    /// (`height * width * channels` bytes).
    ///
    /// Three-channel input gets an opaque alpha plane appended.
    pub fn from_bgr_bytes(width: u32, height: u32, channels: usize, data: &[u8]) -> Result<Self> {
        let count = pixel_count(width, height)?;
        if channels != 3 && channels != 4 {
            return Err(IcctError::invalid_image(format!(
                "expected 3 or 4 channels, got {channels}"
            )));
        }
        if data.len() != count * channels {
            return Err(IcctError::invalid_image(format!(
                "{width}x{height}x{channels} image needs {} bytes, got {}",
                count * channels,
                data.len()
            )));
        }

        let pixels = if channels == 3 {
            data.chunks_exact(3)
                .map(|px| Bgra::new(px[0], px[1], px[2], u8::MAX))
                .collect()
        } else {
            data.chunks_exact(4)
                .map(|px| Bgra::new(px[0], px[1], px[2], px[3]))
                .collect()
        };

        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Bgra] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Bgra> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Like [`pixel`](Self::pixel), but reports the miss as an error.
    pub fn pixel_checked(&self, x: u32, y: u32) -> Result<Bgra> {
        self.pixel(x, y).ok_or(IcctError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Raw interleaved BGRA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Interleaved RGBA bytes, for handing to encoders.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_rgba()).collect()
    }

    /// A new buffer of the same shape with `f` applied to every pixel.
    pub fn map_pixels(&self, f: impl Fn(Bgra) -> Bgra) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| IcctError::invalid_image(format!("{width}x{height} is too large")))
}
