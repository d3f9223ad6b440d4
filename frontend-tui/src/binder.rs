//! Keyboard-table input binding.

use std::collections::HashMap;

use menu::{DpadMode, InputBinder, PadButton, Step};

/// Device kinds a port can cycle through. Index order matters: it is what
/// `Field::InputDevice` persists.
pub const DEVICE_KINDS: usize = 3;

const DEVICE_LABELS: [&str; DEVICE_KINDS] = ["Gamepad", "Keyboard", "None"];

/// Keys each pad button can be rebound to. The first entry is the default.
fn key_candidates(button: PadButton) -> &'static [&'static str] {
    match button {
        PadButton::Up => &["Up", "W", "Num8"],
        PadButton::Down => &["Down", "S", "Num2"],
        PadButton::Left => &["Left", "A", "Num4"],
        PadButton::Right => &["Right", "D", "Num6"],
        PadButton::A => &["X", "Enter", "Space"],
        PadButton::B => &["Z", "Backspace", "LeftCtrl"],
        PadButton::X => &["S", "V", "Home"],
        PadButton::Y => &["A", "C", "End"],
        PadButton::Start => &["Enter", "F1", "RightShift"],
        PadButton::Select => &["RightShift", "Tab", "Backquote"],
        PadButton::L => &["Q", "PageUp", "F3"],
        PadButton::R => &["E", "PageDown", "F4"],
        PadButton::L2 => &["1", "Insert", "F5"],
        PadButton::R2 => &["2", "Delete", "F6"],
        PadButton::L3 => &["3", "F11", "LeftAlt"],
        PadButton::R3 => &["4", "F12", "RightAlt"],
    }
}

/// Binds pad buttons to keyboard keys from a fixed candidate table. Left and
/// Right on a bind row walk the table; Start snaps back to the default key.
#[derive(Default)]
pub struct TableBinder {
    bind_index: HashMap<(usize, PadButton), usize>,
    devices: HashMap<usize, usize>,
    dpad_modes: HashMap<usize, DpadMode>,
}

impl TableBinder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputBinder for TableBinder {
    fn adjust_bind(&mut self, port: usize, button: PadButton, step: Step) {
        let len = key_candidates(button).len();
        let index = self.bind_index.entry((port, button)).or_insert(0);
        *index = match step {
            Step::Increase => (*index + 1) % len,
            Step::Decrease => (*index + len - 1) % len,
            Step::Default => 0,
        };
    }

    fn bind_label(&self, port: usize, button: PadButton) -> String {
        let index = self.bind_index.get(&(port, button)).copied().unwrap_or(0);
        key_candidates(button)[index].to_string()
    }

    fn device_count(&self) -> usize {
        DEVICE_KINDS
    }

    fn device_label(&self, device_index: usize) -> String {
        DEVICE_LABELS[device_index % DEVICE_KINDS].to_string()
    }

    fn apply_device(&mut self, port: usize, device_index: usize) {
        tracing::debug!(port, device_index, "input device applied");
        self.devices.insert(port, device_index);
    }

    fn apply_dpad_mode(&mut self, port: usize, mode: DpadMode) {
        tracing::debug!(port, ?mode, "dpad emulation applied");
        self.dpad_modes.insert(port, mode);
    }
}
