//! Core mode types.

/// The device's top-level operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Idle, no rest in progress.
    #[default]
    Off,

    /// Short daytime rest of fixed length.
    Nap,

    /// Night rest, lasts until woken.
    Sleep,
}

impl Mode {
    /// Stable numeric code: `Off` = 0, `Nap` = 1, `Sleep` = 2.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        match self {
            Mode::Off => 0,
            Mode::Nap => 1,
            Mode::Sleep => 2,
        }
    }

    /// Parses a numeric code produced by [`Mode::as_u8`].
    #[inline]
    pub const fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(Mode::Off),
            1 => Some(Mode::Nap),
            2 => Some(Mode::Sleep),
            _ => None,
        }
    }

    /// Returns true for `Nap` and `Sleep`.
    #[inline]
    pub const fn is_resting(self) -> bool {
        !matches!(self, Mode::Off)
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Mode::Off => "OFF",
            Mode::Nap => "NAP",
            Mode::Sleep => "SLEEP",
        };
        f.write_str(name)
    }
}
