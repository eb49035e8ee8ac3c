//! Image loading and saving.
//!
//! Decoding and encoding go through the `image` crate. Whatever the source
//! layout (grey, grey+alpha, RGB, RGBA, any bit depth) the result is an
//! 8-bit BGRA [`ImageBuffer`], with opaque alpha when the source has none.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::buffer::{Bgra, ImageBuffer};
use crate::error::{IcctError, Result};

/// Extension used when a save path has none.
pub const DEFAULT_EXTENSION: &str = "png";

/// Load an image from disk.
pub fn load_image(path: &Path) -> Result<ImageBuffer> {
    let img = image::open(path).map_err(|source| IcctError::InvalidImage {
        reason: format!("failed to decode {}", path.display()),
        source: Some(source),
    })?;
    from_dynamic(&img)
}

/// Decode an encoded image held in memory.
pub fn decode_image(bytes: &[u8]) -> Result<ImageBuffer> {
    let img = image::load_from_memory(bytes).map_err(|source| IcctError::InvalidImage {
        reason: "failed to decode image data".to_string(),
        source: Some(source),
    })?;
    from_dynamic(&img)
}

/// Convert a decoded image to BGRA.
pub fn from_dynamic(img: &DynamicImage) -> Result<ImageBuffer> {
    let source_channels = img.color().channel_count();
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let pixels = rgba.pixels().map(|p| Bgra::from_rgba(p.0)).collect();

    tracing::debug!(width, height, source_channels, "decoded image");
    ImageBuffer::new(width, height, pixels)
}

/// Encode `image` to `path`, choosing the format from the extension.
///
/// PNG and BMP keep all four channels; JPEG drops alpha. A path without an
/// extension gets [`DEFAULT_EXTENSION`]. Returns the path actually written.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<PathBuf> {
    let path = if path.extension().is_none() {
        path.with_extension(DEFAULT_EXTENSION)
    } else {
        path.to_path_buf()
    };

    if image.is_empty() {
        return Err(IcctError::SaveFailed {
            path,
            reason: "image has no pixels".to_string(),
            source: None,
        });
    }

    let format = ImageFormat::from_path(&path).map_err(|source| IcctError::SaveFailed {
        path: path.clone(),
        reason: "unrecognised file extension".to_string(),
        source: Some(source),
    })?;

    let Some(rgba) = RgbaImage::from_raw(image.width(), image.height(), image.to_rgba_bytes())
    else {
        return Err(IcctError::SaveFailed {
            path,
            reason: "pixel data does not match image dimensions".to_string(),
            source: None,
        });
    };

    let written = match format {
        ImageFormat::Png | ImageFormat::Bmp => rgba.save_with_format(&path, format),
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(rgba)
            .to_rgb8()
            .save_with_format(&path, format),
        other => {
            return Err(IcctError::SaveFailed {
                path,
                reason: format!("{other:?} output is not supported"),
                source: None,
            });
        }
    };

    written.map_err(|source| IcctError::SaveFailed {
        path: path.clone(),
        reason: "encoder failed".to_string(),
        source: Some(source),
    })?;

    Ok(path)
}
