//! Subcommand implementations.
//!
//! Each command opens the input into a fresh [`Session`], replays the
//! requested filter steps, then does its own work on the current buffer.

pub mod apply;
pub mod modes;
pub mod pick;
pub mod planes;

use std::path::Path;

use icct_core::Session;

use crate::error::CliError;
use crate::parsers::FilterStep;

/// Open `input` and apply `steps` in order.
pub fn prepare_session(
    input: &Path,
    steps: &[FilterStep],
    cumulative: bool,
) -> Result<Session, CliError> {
    let mut session = Session::new()?;
    session.set_cumulative(cumulative);
    session.open(input)?;

    for step in steps {
        tracing::info!("applying {} {:?}", step.mode, step.raw_slots());
        session.apply_text(step.mode, step.raw_slots())?;
    }
    Ok(session)
}
