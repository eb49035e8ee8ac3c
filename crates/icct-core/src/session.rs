//! The two-slot buffer session a caller drives.
//!
//! A session holds the `original` image, captured once at load and never
//! modified, and the `current` image, which every filter, reset and load
//! replaces wholesale. Only `current` is ever displayed, saved or picked
//! from. Operations either succeed and swap in a new `current`, or fail and
//! leave both slots as they were.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::buffer::ImageBuffer;
use crate::error::{IcctError, Result};
use crate::filter::{self, FilterParams, OperationMode};
use crate::io;
use crate::picker::{self, PixelReport};
use crate::planes::ChannelPlanes;

#[derive(Debug, Clone)]
struct Slots {
    original: ImageBuffer,
    current: ImageBuffer,
}

/// Original and working buffers plus the cumulative flag.
#[derive(Debug, Clone)]
pub struct Session {
    slots: Option<Slots>,
    cumulative: bool,
}

impl Session {
    /// An empty session. Fails if the operation table is inconsistent.
    pub fn new() -> Result<Self> {
        filter::validate_table()?;
        Ok(Self {
            slots: None,
            cumulative: false,
        })
    }

    /// When set, each filter starts from the last result instead of the
    /// original, so repeated filters compose.
    pub fn set_cumulative(&mut self, cumulative: bool) {
        self.cumulative = cumulative;
    }

    pub fn cumulative(&self) -> bool {
        self.cumulative
    }

    pub fn is_loaded(&self) -> bool {
        self.slots.is_some()
    }

    pub fn original(&self) -> Option<&ImageBuffer> {
        self.slots.as_ref().map(|s| &s.original)
    }

    pub fn current(&self) -> Option<&ImageBuffer> {
        self.slots.as_ref().map(|s| &s.current)
    }

    /// Install a decoded image as both original and current.
    pub fn load(&mut self, image: ImageBuffer) -> &ImageBuffer {
        tracing::info!("loaded {}x{} image", image.width(), image.height());
        let slots = self.slots.insert(Slots {
            current: image.clone(),
            original: image,
        });
        &slots.current
    }

    /// Decode `path` and load it. A file that cannot be decoded leaves the
    /// session empty.
    pub fn open(&mut self, path: &Path) -> Result<&ImageBuffer> {
        match io::load_image(path) {
            Ok(image) => {
                tracing::info!("opened {}", path.display());
                Ok(self.load(image))
            }
            Err(e) => {
                tracing::warn!("failed to open {}: {e}", path.display());
                self.clear();
                Err(e)
            }
        }
    }

    /// Drop both buffers.
    pub fn clear(&mut self) {
        if self.slots.take().is_some() {
            tracing::info!("image cleared");
        }
    }

    /// Run `mode` over the original (or, in cumulative mode, the current)
    /// buffer and make the result current.
    pub fn apply(&mut self, mode: OperationMode, params: &FilterParams) -> Result<&ImageBuffer> {
        let cumulative = self.cumulative;
        let slots = self.slots.as_mut().ok_or(IcctError::NoImage)?;
        let source = if cumulative {
            &slots.current
        } else {
            &slots.original
        };

        let started = Instant::now();
        let out = filter::apply(mode, params, source).inspect_err(|e| {
            tracing::warn!("{mode} rejected: {e}");
        })?;

        tracing::debug!(
            "{mode} {:?} (cumulative={cumulative}) took {:.2?}",
            params.slots(),
            started.elapsed()
        );
        slots.current = out;
        Ok(&slots.current)
    }

    /// Parse raw slot text for `mode`, then [`apply`](Self::apply) it.
    /// Text that does not parse aborts before any buffer is touched.
    pub fn apply_text(&mut self, mode: OperationMode, raw: [&str; 3]) -> Result<&ImageBuffer> {
        if !self.is_loaded() {
            return Err(IcctError::NoImage);
        }
        let params = FilterParams::parse(mode, raw).inspect_err(|e| {
            tracing::warn!("{mode} rejected: {e}");
        })?;
        self.apply(mode, &params)
    }

    /// Make current a fresh copy of the original.
    pub fn reset(&mut self) -> Result<&ImageBuffer> {
        let slots = self.slots.as_mut().ok_or(IcctError::NoImage)?;
        slots.current = slots.original.clone();
        tracing::info!("reset to original");
        Ok(&slots.current)
    }

    /// Encode the current buffer to `path`. Returns the path written.
    pub fn save(&self, path: &Path) -> Result<PathBuf> {
        let current = self.current().ok_or(IcctError::NoImage)?;
        let written = io::save_image(current, path).inspect_err(|e| {
            tracing::warn!("{e}");
        })?;
        tracing::info!("saved {}", written.display());
        Ok(written)
    }

    /// Sample the current buffer at column `x`, row `y`.
    pub fn query(&self, x: u32, y: u32) -> Result<PixelReport> {
        let current = self.current().ok_or(IcctError::NoImage)?;
        picker::query_pixel(current, x, y)
    }

    /// Colour planes of the current buffer.
    pub fn planes(&self) -> Result<ChannelPlanes> {
        let current = self.current().ok_or(IcctError::NoImage)?;
        Ok(ChannelPlanes::compute(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Bgra;

    fn loaded() -> Session {
        let mut session = Session::new().unwrap();
        let pixels = vec![
            Bgra::new(10, 20, 200, 255),
            Bgra::new(100, 120, 140, 255),
            Bgra::new(0, 0, 0, 0),
            Bgra::new(255, 255, 255, 128),
        ];
        session.load(ImageBuffer::new(2, 2, pixels).unwrap());
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new().unwrap();
        assert!(!session.is_loaded());
        assert!(!session.cumulative());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_operations_without_image_report_no_image() {
        let mut session = Session::new().unwrap();
        assert!(matches!(
            session.apply(OperationMode::Greyscale, &FilterParams::default()),
            Err(IcctError::NoImage)
        ));
        assert!(matches!(
            session.apply_text(OperationMode::Adjust, ["x", "", ""]),
            Err(IcctError::NoImage)
        ));
        assert!(matches!(session.reset(), Err(IcctError::NoImage)));
        assert!(matches!(session.query(0, 0), Err(IcctError::NoImage)));
    }

    #[test]
    fn test_non_cumulative_restarts_from_original() {
        let mut session = loaded();
        let params = FilterParams::new(10, 0, 0);
        let first = session.apply(OperationMode::Intensity, &params).unwrap().clone();
        let second = session.apply(OperationMode::Intensity, &params).unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cumulative_composes() {
        let mut session = loaded();
        session.set_cumulative(true);
        let params = FilterParams::new(10, 0, 0);
        session.apply(OperationMode::Intensity, &params).unwrap();
        session.apply(OperationMode::Intensity, &params).unwrap();
        assert_eq!(session.query(1, 0).unwrap().rgb[0], 160);
    }

    #[test]
    fn test_rejected_params_leave_buffers_untouched() {
        let mut session = loaded();
        session.set_cumulative(true);
        session.apply(OperationMode::Inverse, &FilterParams::new(255, 0, 0)).unwrap();
        let before = session.current().unwrap().clone();

        let err = session
            .apply_text(OperationMode::Intensity, ["12", "abc", "0"])
            .unwrap_err();
        assert!(matches!(err, IcctError::InvalidParameters { slot: "Green", .. }));
        assert!(session
            .apply(OperationMode::Adjust, &FilterParams::new(500, 0, 0))
            .is_err());

        assert_eq!(session.current().unwrap(), &before);
    }

    #[test]
    fn test_reset_restores_original() {
        let mut session = loaded();
        let original = session.original().unwrap().clone();
        session.set_cumulative(true);
        session.apply(OperationMode::Greyscale, &FilterParams::default()).unwrap();
        session.apply(OperationMode::Inverse, &FilterParams::new(200, 0, 0)).unwrap();
        assert_ne!(session.current().unwrap(), &original);

        assert_eq!(session.reset().unwrap(), &original);
        assert_eq!(session.original().unwrap(), &original);
    }

    #[test]
    fn test_clear_unloads() {
        let mut session = loaded();
        session.clear();
        assert!(!session.is_loaded());
        assert!(session.original().is_none());
    }

    #[test]
    fn test_query_reads_current_buffer() {
        let mut session = loaded();
        session.apply(OperationMode::Inverse, &FilterParams::new(255, 0, 0)).unwrap();
        let report = session.query(0, 0).unwrap();
        assert_eq!(report.rgb, [55, 235, 245]);
        assert_eq!(report.alpha, 255);
    }

    #[test]
    fn test_failed_open_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.png");
        std::fs::write(&bogus, b"not a png").unwrap();

        let mut session = loaded();
        assert!(session.open(&bogus).is_err());
        assert!(!session.is_loaded());
    }
}
