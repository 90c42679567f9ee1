//! Rest mode controller with LED output and timing hints.
//!
//! Provides [`ModeController`], which tracks OFF / NAP / SLEEP from rest and
//! wake events plus the wall clock, and drives a single indicator LED. Also
//! defines the [`IndicatorLed`] trait for hardware abstraction.

use crate::colors::{AMBER, BLACK, BLUE, Rgb};
use crate::command::ControllerAction;
use crate::mode::{
    MAX_FORWARD_STEP, classify_rest, clock_step, minutes_until_warn_change, nap_finished,
    warn_active,
};
use crate::settings::{Settings, SettingsError};
use crate::time::{Clock, TimeOfDay};
use crate::types::Mode;

/// Trait for abstracting the indicator LED hardware.
pub trait IndicatorLed {
    /// Sets the LED to the specified color.
    ///
    /// The color already has the configured brightness applied. Handle any
    /// hardware errors internally - this method cannot fail.
    fn set_color(&mut self, color: Rgb);
}

/// Colors shown for each output state, before brightness scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeColors {
    pub off: Rgb,
    pub nap: Rgb,
    pub sleep: Rgb,
    /// Sleep while the warn window is open.
    pub warn: Rgb,
}

impl ModeColors {
    pub const DEFAULT: ModeColors = ModeColors {
        off: BLACK,
        nap: Rgb::new(96, 0, 160),
        sleep: BLUE,
        warn: AMBER,
    };

    /// Picks the color for a mode and warn flag.
    #[inline]
    pub fn color_for(&self, mode: Mode, warn: bool) -> Rgb {
        match mode {
            Mode::Off => self.off,
            Mode::Nap => self.nap,
            Mode::Sleep if warn => self.warn,
            Mode::Sleep => self.sleep,
        }
    }
}

impl Default for ModeColors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Timing information returned by service operations.
///
/// Indicates when the controller needs to be serviced again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming {
    /// Service again after this many minutes (nap end or warn window edge).
    Delay(u16),

    /// Nothing is scheduled. Service again on the next event.
    Idle,
}

/// Errors that can occur during controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError {
    /// Operation called from an invalid mode.
    InvalidState {
        /// Description of the valid mode(s), e.g. "Off" or "Nap or Sleep"
        expected: &'static str,
        /// The actual current mode
        actual: Mode,
    },
    /// Rejected settings update.
    InvalidSettings(SettingsError),
}

impl core::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ControllerError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but controller is in {}",
                    expected, actual
                )
            }
            ControllerError::InvalidSettings(err) => {
                write!(f, "invalid settings: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ControllerError {}

impl From<SettingsError> for ControllerError {
    fn from(err: SettingsError) -> Self {
        ControllerError::InvalidSettings(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RestState {
    Off,
    Nap {
        started: TimeOfDay,
        last_seen: TimeOfDay,
        elapsed: u16,
    },
    Sleep,
}

/// Tracks the rest mode and drives an indicator LED.
///
/// Starts in `Off`. A rest request picks `Nap` or `Sleep` from the time of
/// day; a nap ends by itself after `nap_length` minutes, sleep lasts until
/// [`wake`](Self::wake). During sleep the warn flag follows the warn window.
///
/// # Type Parameters
/// * `'c` - Lifetime of the clock reference
/// * `L` - LED implementation type
/// * `C` - Clock implementation type
pub struct ModeController<'c, L: IndicatorLed, C: Clock> {
    led: L,
    clock: &'c C,
    settings: Settings,
    colors: ModeColors,
    state: RestState,
    warn: bool,
    current_color: Rgb,
}

impl<'c, L: IndicatorLed, C: Clock> ModeController<'c, L, C> {
    /// Creates an `Off` controller and writes the off color to the LED.
    ///
    /// Settings that fail validation are replaced by [`Settings::DEFAULT`].
    pub fn new(led: L, clock: &'c C, settings: Settings) -> Self {
        Self::with_colors(led, clock, settings, ModeColors::DEFAULT)
    }

    /// Like [`new`](Self::new) with custom colors.
    pub fn with_colors(mut led: L, clock: &'c C, settings: Settings, colors: ModeColors) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("invalid settings ({}), using defaults", _err);
                Settings::DEFAULT
            }
        };

        let current_color = colors.off.scaled(settings.brightness);
        led.set_color(current_color);

        Self {
            led,
            clock,
            settings,
            colors,
            state: RestState::Off,
            warn: false,
            current_color,
        }
    }

    /// Handles a controller action by dispatching to the appropriate method.
    ///
    /// # Returns
    /// * `Ok(ServiceTiming)` - When to service next
    /// * `Err` - Invalid state or rejected settings
    pub fn handle_action(
        &mut self,
        action: ControllerAction,
    ) -> Result<ServiceTiming, ControllerError> {
        match action {
            ControllerAction::RequestRest => self.request_rest(),
            ControllerAction::Wake => {
                self.wake()?;
                Ok(ServiceTiming::Idle)
            }
            ControllerAction::Service => Ok(self.service()),
            ControllerAction::UpdateSettings(settings) => {
                self.update_settings(settings)?;
                Ok(self.service())
            }
        }
    }

    /// Starts a nap or a sleep depending on the time of day.
    ///
    /// Must be called from `Off`.
    pub fn request_rest(&mut self) -> Result<ServiceTiming, ControllerError> {
        if self.state != RestState::Off {
            return Err(ControllerError::InvalidState {
                expected: "Off",
                actual: self.mode(),
            });
        }

        let now = self.clock.now();
        self.state = match classify_rest(now, &self.settings) {
            Mode::Nap => RestState::Nap {
                started: now,
                last_seen: now,
                elapsed: 0,
            },
            _ => RestState::Sleep,
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("rest requested at {}: entering {}", now, self.mode());

        Ok(self.service())
    }

    /// Ends a nap or sleep early and returns to `Off`.
    ///
    /// Must be called from `Nap` or `Sleep`.
    pub fn wake(&mut self) -> Result<(), ControllerError> {
        if self.state == RestState::Off {
            return Err(ControllerError::InvalidState {
                expected: "Nap or Sleep",
                actual: Mode::Off,
            });
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("wake from {}", self.mode());

        self.enter_off();
        Ok(())
    }

    /// Re-evaluates time-driven state and updates the LED if necessary.
    ///
    /// Ends a nap once `nap_length` minutes have passed and tracks the warn
    /// window during sleep. Can be called from any mode.
    ///
    /// Nap time accumulates from clock steps between calls, so setting the
    /// clock back never shortens a nap. During a nap, service at least every
    /// [`MAX_FORWARD_STEP`] minutes; the returned delay never exceeds that.
    ///
    /// # Returns
    /// - `ServiceTiming::Delay(minutes)` - next nap end or warn window edge
    /// - `ServiceTiming::Idle` - nothing scheduled
    pub fn service(&mut self) -> ServiceTiming {
        let now = self.clock.now();

        let timing = match self.state {
            RestState::Off => ServiceTiming::Idle,
            RestState::Nap {
                started,
                last_seen,
                elapsed,
            } => {
                let step = clock_step(last_seen, now);

                #[cfg(feature = "defmt")]
                if step == 0 && last_seen != now {
                    defmt::warn!("clock moved back from {} to {} during nap", last_seen, now);
                }

                let elapsed = elapsed.saturating_add(step);
                if nap_finished(elapsed, &self.settings) {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("nap from {} finished at {}", started, now);

                    self.enter_off();
                    return ServiceTiming::Idle;
                }

                self.state = RestState::Nap {
                    started,
                    last_seen: now,
                    elapsed,
                };
                let remaining = self.settings.nap_length - elapsed;
                ServiceTiming::Delay(remaining.min(MAX_FORWARD_STEP - 1))
            }
            RestState::Sleep => {
                let warn = warn_active(now, &self.settings);

                #[cfg(feature = "defmt")]
                if warn != self.warn {
                    defmt::debug!("warn window {} at {}", warn, now);
                }

                self.warn = warn;
                minutes_until_warn_change(now, &self.settings)
                    .map_or(ServiceTiming::Idle, ServiceTiming::Delay)
            }
        };

        self.refresh_led();
        timing
    }

    /// Validates and replaces the settings snapshot.
    ///
    /// A running nap keeps its elapsed time and uses the new length. The LED
    /// is refreshed on the next [`service`](Self::service).
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), SettingsError> {
        if let Err(err) = settings.validate() {
            #[cfg(feature = "defmt")]
            defmt::warn!("settings update rejected: {}", err);
            return Err(err);
        }

        self.settings = settings;
        Ok(())
    }

    fn enter_off(&mut self) {
        self.state = RestState::Off;
        self.warn = false;
        self.refresh_led();
    }

    /// Writes the LED only when the output color changed.
    fn refresh_led(&mut self) {
        let color = self
            .colors
            .color_for(self.mode(), self.warn)
            .scaled(self.settings.brightness);

        if color != self.current_color {
            self.led.set_color(color);
            self.current_color = color;
        }
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        match self.state {
            RestState::Off => Mode::Off,
            RestState::Nap { .. } => Mode::Nap,
            RestState::Sleep => Mode::Sleep,
        }
    }

    /// Returns true while sleeping inside the warn window.
    pub fn warn_active(&self) -> bool {
        self.warn
    }

    /// Returns the color currently shown on the LED, brightness applied.
    pub fn current_color(&self) -> Rgb {
        self.current_color
    }

    /// Returns the configured brightness.
    pub fn brightness(&self) -> u8 {
        self.settings.brightness
    }

    /// Returns the active settings snapshot.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns when the running nap started, if napping.
    pub fn nap_started(&self) -> Option<TimeOfDay> {
        match self.state {
            RestState::Nap { started, .. } => Some(started),
            _ => None,
        }
    }

    /// Returns a reference to the LED.
    pub fn led(&self) -> &L {
        &self.led
    }
}
