//! Per-mode parameter slot metadata.
//!
//! Each mode has three slots, labelled R, G, B in the UI. A slot is either
//! unused or carries a label and an inclusive integer range. This table is
//! the single source for slot labels, ranges, and which slots a transform
//! may read.

use serde::Serialize;

use super::mode::OperationMode;
use crate::error::{IcctError, Result};

/// Names of the three parameter slots, in order.
pub const SLOT_NAMES: [&str; 3] = ["R", "G", "B"];

/// Label and inclusive range of one active parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotSpec {
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
}

impl SlotSpec {
    const fn new(label: &'static str, min: i32, max: i32) -> Self {
        Self { label, min, max }
    }

    pub const fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Slot layout of one operation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeSpec {
    pub mode: OperationMode,
    /// `None` marks an unused slot.
    pub slots: [Option<SlotSpec>; 3],
}

const CHANNEL_BYTE: [Option<SlotSpec>; 3] = [
    Some(SlotSpec::new("Red", 0, 255)),
    Some(SlotSpec::new("Green", 0, 255)),
    Some(SlotSpec::new("Blue", 0, 255)),
];

/// Indexed by the position of the mode in [`OperationMode::ALL`].
const MODE_TABLE: [ModeSpec; 7] = [
    ModeSpec {
        mode: OperationMode::Adjust,
        slots: [
            Some(SlotSpec::new("Brightness", -100, 100)),
            Some(SlotSpec::new("Contrast", -100, 100)),
            None,
        ],
    },
    ModeSpec {
        mode: OperationMode::Specific,
        slots: CHANNEL_BYTE,
    },
    ModeSpec {
        mode: OperationMode::Intensity,
        slots: [
            Some(SlotSpec::new("Red", -255, 255)),
            Some(SlotSpec::new("Green", -255, 255)),
            Some(SlotSpec::new("Blue", -255, 255)),
        ],
    },
    ModeSpec {
        mode: OperationMode::Greyscale,
        slots: [None, None, None],
    },
    ModeSpec {
        mode: OperationMode::Inverse,
        slots: [Some(SlotSpec::new("Amount", 0, 255)), None, None],
    },
    ModeSpec {
        mode: OperationMode::Ceiling,
        slots: CHANNEL_BYTE,
    },
    ModeSpec {
        mode: OperationMode::Floor,
        slots: CHANNEL_BYTE,
    },
];

impl OperationMode {
    /// Slot layout for this mode.
    pub fn spec(self) -> &'static ModeSpec {
        let index = match self {
            Self::Adjust => 0,
            Self::Specific => 1,
            Self::Intensity => 2,
            Self::Greyscale => 3,
            Self::Inverse => 4,
            Self::Ceiling => 5,
            Self::Floor => 6,
        };
        &MODE_TABLE[index]
    }
}

/// The whole table, in menu order.
pub fn mode_table() -> &'static [ModeSpec] {
    &MODE_TABLE
}

/// Check the table is consistent: every entry sits at its mode's index,
/// and every active slot has a label and a range that contains 0 (the
/// value slots reset to when the mode changes).
pub fn validate_table() -> Result<()> {
    for (expected, spec) in OperationMode::ALL.into_iter().zip(MODE_TABLE.iter()) {
        if spec.mode != expected {
            return Err(IcctError::InvalidModeTable {
                mode: expected,
                reason: format!("entry is labelled {}", spec.mode),
            });
        }

        for (name, slot) in SLOT_NAMES.iter().zip(spec.slots.iter()) {
            let Some(slot) = slot else { continue };
            let reason = if slot.label.is_empty() {
                Some(format!("slot {name} has no label"))
            } else if slot.min > slot.max {
                Some(format!("slot {name} range [{}, {}] is empty", slot.min, slot.max))
            } else if !slot.contains(0) {
                Some(format!("slot {name} range [{}, {}] excludes 0", slot.min, slot.max))
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(IcctError::InvalidModeTable {
                    mode: spec.mode,
                    reason,
                });
            }
        }
    }
    Ok(())
}
