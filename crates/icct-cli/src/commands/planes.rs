//! `icct planes`: export each colour channel as a greyscale image.

use std::path::{Path, PathBuf};

use icct_core::{Bgra, Channel, ImageBuffer, io};

use crate::error::CliError;
use crate::parsers::FilterStep;

use super::prepare_session;

pub struct PlanesOptions<'a> {
    pub input: &'a Path,
    pub out_dir: &'a Path,
    pub steps: &'a [FilterStep],
    pub cumulative: bool,
}

/// Writes `blue.png`, `green.png`, `red.png` into the output directory and
/// returns their paths.
pub fn run(opts: &PlanesOptions<'_>) -> Result<Vec<PathBuf>, CliError> {
    let session = prepare_session(opts.input, opts.steps, opts.cumulative)?;
    let planes = session.planes()?;

    std::fs::create_dir_all(opts.out_dir).map_err(|source| CliError::CreateDir {
        path: opts.out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(3);
    for channel in Channel::COLOR {
        let Some(plane) = planes.plane(channel) else {
            continue;
        };
        if let Some(stats) = planes.stats(channel) {
            tracing::info!(
                "{channel}: min {} max {} mean {:.1}",
                stats.min,
                stats.max,
                stats.mean
            );
        }

        let pixels = plane.iter().map(|&v| Bgra::new(v, v, v, u8::MAX)).collect();
        let image = ImageBuffer::new(planes.width, planes.height, pixels)?;
        let path = opts.out_dir.join(format!("{}.png", channel.label()));
        written.push(io::save_image(&image, &path)?);
    }
    Ok(written)
}
