//! Per-channel planes: the data behind surface and heatmap views.
//!
//! Each plane holds one colour channel of the image, row-major, one byte
//! per pixel, so a viewer can plot intensity against position.

use serde::{Deserialize, Serialize};

use crate::buffer::{Channel, ImageBuffer};

/// Summary of one channel plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneStats {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}

/// Red, green and blue planes of an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPlanes {
    pub width: u32,
    pub height: u32,
    /// Red channel (width × height, row-major).
    pub red: Vec<u8>,
    /// Green channel (width × height, row-major).
    pub green: Vec<u8>,
    /// Blue channel (width × height, row-major).
    pub blue: Vec<u8>,
}

impl ChannelPlanes {
    /// Split `image` into its colour planes.
    pub fn compute(image: &ImageBuffer) -> Self {
        let count = image.pixels().len();
        let mut red = Vec::with_capacity(count);
        let mut green = Vec::with_capacity(count);
        let mut blue = Vec::with_capacity(count);

        for px in image.pixels() {
            red.push(px.red());
            green.push(px.green());
            blue.push(px.blue());
        }

        Self {
            width: image.width(),
            height: image.height(),
            red,
            green,
            blue,
        }
    }

    /// Plane for a colour channel. Alpha has no plane.
    pub fn plane(&self, channel: Channel) -> Option<&[u8]> {
        match channel {
            Channel::Red => Some(&self.red),
            Channel::Green => Some(&self.green),
            Channel::Blue => Some(&self.blue),
            Channel::Alpha => None,
        }
    }

    /// Minimum, maximum and mean of a colour channel, or `None` for alpha
    /// or an empty image.
    pub fn stats(&self, channel: Channel) -> Option<PlaneStats> {
        let plane = self.plane(channel)?;
        let min = *plane.iter().min()?;
        let max = *plane.iter().max()?;
        let sum: u64 = plane.iter().map(|&v| u64::from(v)).sum();
        Some(PlaneStats {
            min,
            max,
            mean: sum as f64 / plane.len() as f64,
        })
    }
}
