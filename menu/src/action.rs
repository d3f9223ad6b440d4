/// A discrete navigation input, one per engine tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Confirm / activate the entry under the cursor.
    Ok,
    /// Back out of the current context.
    Cancel,
    /// Reset the entry under the cursor to its default.
    Start,
    /// The host's menu button: jump to settings or back out of them.
    Menu,
    /// Rebuild the current entry list without moving anything.
    Refresh,
    Noop,
}

/// What the host should do after a tick.
///
/// `EndWithEffect` means a host request has been posted to the session and the
/// menu wants to yield control; `Continue` means keep ticking the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ControlSignal {
    Continue,
    EndWithEffect,
}

impl ControlSignal {
    pub fn ends_tick(self) -> bool {
        self == ControlSignal::EndWithEffect
    }
}
