//! Time-of-day arithmetic on a 1440-minute day.

/// Number of minutes in a day. All time-of-day math is modulo this value.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Trait for abstracting the wall clock.
///
/// Implement this for your RTC or network time source.
pub trait Clock {
    /// Returns the current time of day.
    fn now(&self) -> TimeOfDay;
}

/// A time of day, stored as minutes since midnight in `0..1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time of day, returning `None` if `minute >= 1440`.
    #[inline]
    pub const fn new(minute: u16) -> Option<Self> {
        if minute < MINUTES_PER_DAY {
            Some(TimeOfDay(minute))
        } else {
            None
        }
    }

    /// Creates a time of day from any minute count, reduced modulo 1440.
    #[inline]
    pub const fn wrapping(minute: u32) -> Self {
        TimeOfDay((minute % MINUTES_PER_DAY as u32) as u16)
    }

    /// Creates a time of day from hours (`0..24`) and minutes (`0..60`).
    pub const fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(TimeOfDay(hour as u16 * 60 + minute as u16))
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn minute(self) -> u16 {
        self.0
    }

    /// Hour component, `0..24`.
    #[inline]
    pub const fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Minute-of-hour component, `0..60`.
    #[inline]
    pub const fn minute_of_hour(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Adds minutes, wrapping past midnight.
    #[inline]
    pub const fn add_minutes(self, minutes: u16) -> Self {
        Self::wrapping(self.0 as u32 + minutes as u32)
    }

    /// Forward distance in minutes from `self` to `later`, in `0..1440`.
    ///
    /// `later` earlier on the clock than `self` is taken to be on the next day.
    #[inline]
    pub const fn minutes_until(self, later: TimeOfDay) -> u16 {
        (later.0 + MINUTES_PER_DAY - self.0) % MINUTES_PER_DAY
    }

    /// Returns true if this time lies in the half-open window `[start, end)`.
    ///
    /// When `end < start` the window spans midnight. When `start == end` the
    /// window is empty.
    #[inline]
    pub const fn in_window(self, start: TimeOfDay, end: TimeOfDay) -> bool {
        start.minutes_until(self) < start.minutes_until(end)
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute_of_hour())
    }
}
