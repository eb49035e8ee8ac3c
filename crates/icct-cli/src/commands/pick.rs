//! `icct pick`: report one pixel in every colour model.

use std::path::Path;

use icct_core::color::{HexCase, to_hex_with_case};

use crate::error::CliError;
use crate::parsers::FilterStep;

use super::prepare_session;

pub struct PickOptions<'a> {
    pub input: &'a Path,
    pub x: u32,
    pub y: u32,
    pub steps: &'a [FilterStep],
    pub cumulative: bool,
    pub json: bool,
    pub hex_case: HexCase,
}

/// Returns the text to print.
pub fn run(opts: &PickOptions<'_>) -> Result<String, CliError> {
    let session = prepare_session(opts.input, opts.steps, opts.cumulative)?;
    let mut report = session.query(opts.x, opts.y)?;

    if opts.json {
        report.hex = to_hex_with_case(report.pixel(), opts.hex_case);
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(format!(
        "{}\nSwatch: {} (label {})",
        report.render(opts.hex_case),
        report.swatch(),
        report.label_color()
    ))
}
