//! `icct apply`: filter an image and save the result.

use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::parsers::FilterStep;

use super::prepare_session;

/// Suffix added to the input's stem when no output path is given.
const OUTPUT_SUFFIX: &str = "_filtered";

pub struct ApplyOptions<'a> {
    pub input: &'a Path,
    pub output: Option<&'a Path>,
    pub steps: &'a [FilterStep],
    pub cumulative: bool,
}

/// Returns the path written.
pub fn run(opts: &ApplyOptions<'_>) -> Result<PathBuf, CliError> {
    let session = prepare_session(opts.input, opts.steps, opts.cumulative)?;
    let output = opts
        .output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(opts.input));
    Ok(session.save(&output)?)
}

/// `<dir>/<stem>_filtered.png` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.png"))
}
