//! ICCT Core: domain layer for the image colour channel tool.
//!
//! This crate contains the pixel and buffer model, colour-space conversions
//! for picked pixels, the per-pixel filter engine, and the two-slot buffer
//! session that callers drive. No UI dependencies.

pub mod buffer;
pub mod color;
pub mod error;
pub mod filter;
pub mod io;
pub mod picker;
pub mod planes;
pub mod session;

// Re-exports for convenience.
pub use buffer::{Bgra, Channel, ImageBuffer};
pub use error::{IcctError, Result};
pub use filter::{FilterParams, OperationMode};
pub use picker::PixelReport;
pub use session::Session;
