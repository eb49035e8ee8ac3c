//! `icct modes`: list operations and their parameter slots.

use icct_core::filter::{SLOT_NAMES, mode_table};

/// One line per mode, e.g. `Adjust     R=Brightness[-100,100] G=Contrast[-100,100] B=-`.
pub fn render() -> String {
    mode_table()
        .iter()
        .map(|spec| {
            let slots: Vec<String> = SLOT_NAMES
                .iter()
                .zip(spec.slots.iter())
                .map(|(name, slot)| match slot {
                    Some(slot) => format!("{name}={}[{},{}]", slot.label, slot.min, slot.max),
                    None => format!("{name}=-"),
                })
                .collect();
            format!("{:<10} {}", spec.mode.label(), slots.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
