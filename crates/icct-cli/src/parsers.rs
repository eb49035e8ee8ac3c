//! Parsing of filter steps given on the command line.

use icct_core::OperationMode;

use crate::error::CliError;

/// One filter invocation: a mode plus the raw text of its three slots.
///
/// Slot text is kept unparsed so that number validation happens in the
/// session, exactly as for text typed into a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterStep {
    pub mode: OperationMode,
    pub raw: [String; 3],
}

impl FilterStep {
    pub fn raw_slots(&self) -> [&str; 3] {
        let [r, g, b] = &self.raw;
        [r.as_str(), g.as_str(), b.as_str()]
    }
}

/// Parse a step in the form `MODE` or `MODE:R[,G[,B]]`.
///
/// Missing slots read as `0`, the value slots reset to on mode change.
///
/// # Examples
/// * `greyscale`
/// * `adjust:20,-10`
/// * `ceiling:200,180,255`
pub fn parse_step(step: &str) -> Result<FilterStep, CliError> {
    let invalid = |reason: String| CliError::InvalidStep {
        step: step.to_string(),
        reason,
    };

    let (name, values) = step.split_once(':').unwrap_or((step, ""));
    let mode = name
        .parse::<OperationMode>()
        .map_err(|e| invalid(e.to_string()))?;

    let parts: Vec<&str> = if values.trim().is_empty() {
        Vec::new()
    } else {
        values.split(',').collect()
    };
    if parts.len() > 3 {
        return Err(invalid(format!(
            "expected at most 3 values (R,G,B), got {}",
            parts.len()
        )));
    }

    let mut raw: [String; 3] = Default::default();
    for (slot, text) in raw.iter_mut().enumerate() {
        *text = parts.get(slot).unwrap_or(&"0").trim().to_string();
    }

    Ok(FilterStep { mode, raw })
}
