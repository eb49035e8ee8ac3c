//! Filter parameter slots and their validation.

use serde::{Deserialize, Serialize};

use super::mode::OperationMode;
use super::table::SlotSpec;
use crate::error::{IcctError, Result};

/// The three parameter slots, labelled R, G, B in the UI.
///
/// What each slot means depends on the mode; see
/// [`OperationMode::spec`]. The default `(0, 0, 0)` is what the slots are
/// reset to whenever the mode changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl FilterParams {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    pub const fn slots(&self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    /// Check every slot `mode` uses against its declared range.
    /// Unused slots are not looked at.
    pub fn validate(&self, mode: OperationMode) -> Result<()> {
        for (value, slot) in self.slots().into_iter().zip(mode.spec().slots) {
            let Some(slot) = slot else { continue };
            if !slot.contains(value) {
                return Err(invalid(mode, slot, value.to_string()));
            }
        }
        Ok(())
    }

    /// Parse raw slot text as entered by a user.
    ///
    /// Slots `mode` does not use are ignored and read as 0, whatever they
    /// hold. Used slots must be integers within range.
    pub fn parse(mode: OperationMode, raw: [&str; 3]) -> Result<Self> {
        let mut values = [0_i32; 3];
        for ((value, text), slot) in values.iter_mut().zip(raw).zip(mode.spec().slots) {
            let Some(slot) = slot else { continue };
            *value = text
                .trim()
                .parse::<i32>()
                .map_err(|_| invalid(mode, slot, text.to_string()))?;
            if !slot.contains(*value) {
                return Err(invalid(mode, slot, text.to_string()));
            }
        }
        let [r, g, b] = values;
        Ok(Self { r, g, b })
    }
}

fn invalid(mode: OperationMode, slot: SlotSpec, value: String) -> IcctError {
    IcctError::InvalidParameters {
        mode,
        slot: slot.label,
        value,
        min: slot.min,
        max: slot.max,
    }
}
