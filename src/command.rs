//! Command-based control for the mode controller.

use crate::settings::Settings;

/// Actions for controlling a [`ModeController`](crate::ModeController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerAction {
    /// Rest requested (button press, host command).
    RequestRest,
    /// Wake from a nap or sleep.
    Wake,
    /// Re-evaluate time-driven state.
    Service,
    /// Replace the settings snapshot.
    UpdateSettings(Settings),
}
