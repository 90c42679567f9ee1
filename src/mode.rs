//! Pure mode decisions over a time of day and a settings snapshot.
//!
//! These functions assume settings that passed [`Settings::validate`] and are
//! total over that input.

use crate::settings::Settings;
use crate::time::{MINUTES_PER_DAY, TimeOfDay};
use crate::types::Mode;

/// Classifies a rest request made at `now`.
///
/// Requests strictly before `naps_before_time` are naps, everything at or
/// after it is sleep. With `naps_before_time == 0` every request is sleep.
#[inline]
pub fn classify_rest(now: TimeOfDay, settings: &Settings) -> Mode {
    if now < settings.naps_before() {
        Mode::Nap
    } else {
        Mode::Sleep
    }
}

/// Time of day at which a nap started at `start` ends.
#[inline]
pub fn nap_end(start: TimeOfDay, settings: &Settings) -> TimeOfDay {
    start.add_minutes(settings.nap_length)
}

/// Clock steps of this many minutes or more are read as the clock moving back.
pub const MAX_FORWARD_STEP: u16 = MINUTES_PER_DAY / 2;

/// Minutes of real time between two readings of the clock.
///
/// Forward steps shorter than half a day count in full, wrapping past
/// midnight. Anything else is a backward adjustment (RTC correction, DST
/// fall-back) and counts as zero.
#[inline]
pub fn clock_step(last_seen: TimeOfDay, now: TimeOfDay) -> u16 {
    let step = last_seen.minutes_until(now);
    if step < MAX_FORWARD_STEP { step } else { 0 }
}

/// Returns true once `elapsed` nap minutes reach `nap_length`.
#[inline]
pub fn nap_finished(elapsed: u16, settings: &Settings) -> bool {
    elapsed >= settings.nap_length
}

/// Returns true if `now` lies in the warn window `[sleep_warn_time, sleep_ok_time)`.
///
/// The window wraps past midnight when `sleep_ok_time < sleep_warn_time` and is
/// empty when the two are equal.
#[inline]
pub fn warn_active(now: TimeOfDay, settings: &Settings) -> bool {
    now.in_window(settings.sleep_warn(), settings.sleep_ok())
}

/// Minutes until [`warn_active`] next changes value, or `None` if the warn
/// window is empty.
pub fn minutes_until_warn_change(now: TimeOfDay, settings: &Settings) -> Option<u16> {
    let (warn, ok) = (settings.sleep_warn(), settings.sleep_ok());
    if warn == ok {
        return None;
    }

    let next = if now.in_window(warn, ok) { ok } else { warn };
    Some(now.minutes_until(next))
}
