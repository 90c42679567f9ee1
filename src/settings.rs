//! The persisted settings record and its packed 9-byte codec.
//!
//! Layout, little-endian, no padding:
//!
//! | Bytes | Field              |
//! |-------|--------------------|
//! | 0-1   | `nap_length`       |
//! | 2-3   | `naps_before_time` |
//! | 4-5   | `sleep_warn_time`  |
//! | 6-7   | `sleep_ok_time`    |
//! | 8     | `brightness`       |
//!
//! The record carries no version field.

use crate::time::{MINUTES_PER_DAY, TimeOfDay};

/// Size of the packed settings record in bytes.
pub const SETTINGS_SIZE: usize = 9;

/// Device configuration.
///
/// Time fields are minutes since midnight (`0..1440`). The mode logic treats
/// a `Settings` value as a read-only snapshot and assumes it has passed
/// [`Settings::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Length of a nap in minutes.
    pub nap_length: u16,

    /// Rest requests before this time of day are naps.
    pub naps_before_time: u16,

    /// Start of the warn window during sleep.
    pub sleep_warn_time: u16,

    /// End of the warn window during sleep.
    pub sleep_ok_time: u16,

    /// Output light intensity.
    pub brightness: u8,
}

/// Which time field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    NapsBefore,
    SleepWarn,
    SleepOk,
}

impl core::fmt::Display for TimeField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            TimeField::NapsBefore => "naps_before_time",
            TimeField::SleepWarn => "sleep_warn_time",
            TimeField::SleepOk => "sleep_ok_time",
        };
        f.write_str(name)
    }
}

/// Settings decoding and validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Buffer is not exactly [`SETTINGS_SIZE`] bytes long.
    InvalidLength { expected: usize, actual: usize },

    /// A time-of-day field is not below 1440.
    TimeOutOfRange { field: TimeField, minute: u16 },

    /// Nap length is zero while naps are reachable, or a full day or longer.
    NapLengthOutOfRange(u16),
}

impl core::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SettingsError::InvalidLength { expected, actual } => {
                write!(
                    f,
                    "invalid settings length: expected {} bytes, got {}",
                    expected, actual
                )
            }
            SettingsError::TimeOutOfRange { field, minute } => {
                write!(
                    f,
                    "{} = {} is not a time of day (expected 0..{})",
                    field, minute, MINUTES_PER_DAY
                )
            }
            SettingsError::NapLengthOutOfRange(len) => {
                write!(
                    f,
                    "nap length {} out of range (expected 1..{} minutes)",
                    len, MINUTES_PER_DAY
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SettingsError {}

impl Default for Settings {
    /// 90 minute naps before 18:00, warn window 06:00-07:00, half brightness.
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Settings {
    /// Factory defaults, also used when stored settings are corrupt.
    pub const DEFAULT: Settings = Settings {
        nap_length: 90,
        naps_before_time: 18 * 60,
        sleep_warn_time: 6 * 60,
        sleep_ok_time: 7 * 60,
        brightness: 128,
    };

    /// Checks every field against its documented range.
    ///
    /// # Errors
    /// * `TimeOutOfRange` - a time field is `>= 1440`
    /// * `NapLengthOutOfRange` - `nap_length >= 1440`, or zero while
    ///   `naps_before_time > 0`
    pub fn validate(&self) -> Result<(), SettingsError> {
        let times = [
            (TimeField::NapsBefore, self.naps_before_time),
            (TimeField::SleepWarn, self.sleep_warn_time),
            (TimeField::SleepOk, self.sleep_ok_time),
        ];
        for (field, minute) in times {
            if minute >= MINUTES_PER_DAY {
                return Err(SettingsError::TimeOutOfRange { field, minute });
            }
        }

        let naps_reachable = self.naps_before_time > 0;
        if self.nap_length >= MINUTES_PER_DAY || (naps_reachable && self.nap_length == 0) {
            return Err(SettingsError::NapLengthOutOfRange(self.nap_length));
        }

        Ok(())
    }

    /// Encodes into the packed little-endian layout.
    pub fn to_bytes(&self) -> [u8; SETTINGS_SIZE] {
        let [n0, n1] = self.nap_length.to_le_bytes();
        let [b0, b1] = self.naps_before_time.to_le_bytes();
        let [w0, w1] = self.sleep_warn_time.to_le_bytes();
        let [k0, k1] = self.sleep_ok_time.to_le_bytes();
        [n0, n1, b0, b1, w0, w1, k0, k1, self.brightness]
    }

    /// Decodes the packed layout without range checks.
    pub fn from_bytes_unchecked(bytes: &[u8; SETTINGS_SIZE]) -> Self {
        Self {
            nap_length: u16::from_le_bytes([bytes[0], bytes[1]]),
            naps_before_time: u16::from_le_bytes([bytes[2], bytes[3]]),
            sleep_warn_time: u16::from_le_bytes([bytes[4], bytes[5]]),
            sleep_ok_time: u16::from_le_bytes([bytes[6], bytes[7]]),
            brightness: bytes[8],
        }
    }

    /// Decodes and validates a packed record.
    ///
    /// # Errors
    /// * `InvalidLength` - `data` is not exactly 9 bytes
    /// * any error from [`Settings::validate`]
    pub fn from_bytes(data: &[u8]) -> Result<Self, SettingsError> {
        let bytes: &[u8; SETTINGS_SIZE] =
            data.try_into().map_err(|_| SettingsError::InvalidLength {
                expected: SETTINGS_SIZE,
                actual: data.len(),
            })?;

        let settings = Self::from_bytes_unchecked(bytes);
        settings.validate()?;
        Ok(settings)
    }

    /// Decodes a packed record, falling back to [`Settings::DEFAULT`] if it is
    /// malformed or out of range.
    pub fn load_or_default(data: &[u8]) -> Self {
        match Self::from_bytes(data) {
            Ok(settings) => settings,
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("stored settings rejected ({}), using defaults", _err);
                Self::DEFAULT
            }
        }
    }

    /// `naps_before_time` as a [`TimeOfDay`], reduced modulo 1440.
    #[inline]
    pub const fn naps_before(&self) -> TimeOfDay {
        TimeOfDay::wrapping(self.naps_before_time as u32)
    }

    /// `sleep_warn_time` as a [`TimeOfDay`], reduced modulo 1440.
    #[inline]
    pub const fn sleep_warn(&self) -> TimeOfDay {
        TimeOfDay::wrapping(self.sleep_warn_time as u32)
    }

    /// `sleep_ok_time` as a [`TimeOfDay`], reduced modulo 1440.
    #[inline]
    pub const fn sleep_ok(&self) -> TimeOfDay {
        TimeOfDay::wrapping(self.sleep_ok_time as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Settings::DEFAULT.validate(), Ok(()));
    }

    #[test]
    fn packed_layout_is_little_endian_in_field_order() {
        let settings = Settings {
            nap_length: 0x0102,
            naps_before_time: 0x0304,
            sleep_warn_time: 0x0506,
            sleep_ok_time: 0x0007,
            brightness: 0xAB,
        };
        assert_eq!(
            settings.to_bytes(),
            [0x02, 0x01, 0x04, 0x03, 0x06, 0x05, 0x07, 0x00, 0xAB]
        );
    }

    #[test]
    fn zero_nap_length_allowed_when_naps_unreachable() {
        let settings = Settings {
            nap_length: 0,
            naps_before_time: 0,
            ..Settings::DEFAULT
        };
        assert_eq!(settings.validate(), Ok(()));

        let settings = Settings {
            nap_length: 0,
            ..Settings::DEFAULT
        };
        assert_eq!(settings.validate(), Err(SettingsError::NapLengthOutOfRange(0)));
    }

    #[test]
    fn first_bad_time_field_is_reported() {
        let settings = Settings {
            sleep_warn_time: 1440,
            sleep_ok_time: 2000,
            ..Settings::DEFAULT
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::TimeOutOfRange {
                field: TimeField::SleepWarn,
                minute: 1440
            })
        );
    }
}
