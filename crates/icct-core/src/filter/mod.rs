//! Filter engine: runs one of the seven operations over a whole buffer.

pub mod mode;
pub mod ops;
pub mod params;
pub mod table;

pub use mode::{OperationMode, UnknownMode};
pub use params::FilterParams;
pub use table::{ModeSpec, SLOT_NAMES, SlotSpec, mode_table, validate_table};

use crate::buffer::ImageBuffer;
use crate::error::Result;

/// Apply `mode` with `params` to `image`, returning a new buffer.
///
/// Parameters are validated against the operation table before any pixel
/// is read, so an error leaves nothing half-done. Slots the mode does not
/// use are ignored.
pub fn apply(
    mode: OperationMode,
    params: &FilterParams,
    image: &ImageBuffer,
) -> Result<ImageBuffer> {
    params.validate(mode)?;
    let FilterParams { r, g, b } = *params;

    let out = match mode {
        OperationMode::Adjust => ops::adjust(image, r, g),
        OperationMode::Specific => ops::specific(image, byte(r), byte(g), byte(b)),
        OperationMode::Intensity => ops::intensity(image, r, g, b),
        OperationMode::Greyscale => ops::greyscale(image),
        OperationMode::Inverse => ops::inverse(image, byte(r)),
        OperationMode::Ceiling => ops::ceiling(image, byte(r), byte(g), byte(b)),
        OperationMode::Floor => ops::floor(image, byte(r), byte(g), byte(b)),
    };
    Ok(out)
}

/// Narrow a validated `[0, 255]` slot to a byte.
fn byte(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
