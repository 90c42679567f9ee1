//! Shared test infrastructure for nap-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use nap_clock::{Clock, IndicatorLed, Rgb, TimeOfDay};

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock clock with controllable time of day
pub struct MockClock {
    current_time: core::cell::Cell<TimeOfDay>,
}

impl MockClock {
    pub fn at(minute: u16) -> Self {
        Self {
            current_time: core::cell::Cell::new(t(minute)),
        }
    }

    /// Advance the clock by the given number of minutes, wrapping at midnight
    pub fn advance(&self, minutes: u16) {
        let current = self.current_time.get();
        self.current_time.set(current.add_minutes(minutes));
    }

    pub fn set(&self, minute: u16) {
        self.current_time.set(t(minute));
    }
}

impl Clock for MockClock {
    fn now(&self) -> TimeOfDay {
        self.current_time.get()
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records all color changes for testing
pub struct MockLed {
    current_color: Rgb,
    color_history: heapless::Vec<Rgb, 32>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current_color: Rgb::new(0, 0, 0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn get_last_color(&self) -> Rgb {
        self.current_color
    }

    pub fn color_history(&self) -> &[Rgb] {
        &self.color_history
    }
}

impl IndicatorLed for MockLed {
    fn set_color(&mut self, color: Rgb) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Shorthand for a valid time of day
pub fn t(minute: u16) -> TimeOfDay {
    TimeOfDay::new(minute).expect("test time must be below 1440")
}
