#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb`** / **`Hsv`**: 8-bit color values with exact equality and explicit conversion
//! - **`TimeOfDay`**: Minutes since midnight, with modular arithmetic over a 1440-minute day
//! - **`Mode`**: The device's operating mode (`Off`, `Nap` or `Sleep`)
//! - **`Settings`**: The persisted configuration, packed into 9 little-endian bytes
//! - **`classify_rest`** / **`warn_active`**: Pure decisions over a time and a settings snapshot
//! - **`ModeController`**: Tracks the mode from rest/wake events and drives an indicator LED
//! - **`IndicatorLed`**: Trait to implement for your LED hardware
//! - **`Clock`**: Trait to implement for your real-time clock
//! - **`ControllerAction`**: Commands that can be sent to the controller
//!
//! Time fields are minutes since midnight. HSV hue is in degrees (`0..360`),
//! saturation and value in percent (`0..=100`).

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod command;
pub mod controller;
pub mod mode;
pub mod settings;
pub mod time;
pub mod types;

pub use colors::{ColorError, Hsv, Rgb};
pub use colors::{AMBER, BLACK, BLUE, GREEN, RED, WHITE};
pub use command::ControllerAction;
pub use controller::{ControllerError, IndicatorLed, ModeColors, ModeController, ServiceTiming};
pub use mode::{
    MAX_FORWARD_STEP, classify_rest, clock_step, minutes_until_warn_change, nap_end, nap_finished,
    warn_active,
};
pub use settings::{SETTINGS_SIZE, Settings, SettingsError, TimeField};
pub use time::{Clock, MINUTES_PER_DAY, TimeOfDay};
pub use types::Mode;
