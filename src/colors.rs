//! 8-bit color values in RGB and HSV form.
//!
//! Both representations are plain `Copy` values with exact, per-channel
//! equality. They never compare against each other; convert explicitly with
//! [`Rgb::to_hsv`] or [`Hsv::to_rgb`] first.
//!
//! Conversions run the standard hexcone transform in `f32` through `palette`
//! and round half-up back to the channel width of the target type.

use palette::{FromColor, Srgb};

/// Largest hue accepted by [`Hsv::new`], exclusive.
pub const HUE_MAX: u16 = 360;

/// Largest saturation or value accepted by [`Hsv::new`], inclusive.
pub const PERCENT_MAX: u8 = 100;

/// An RGB color with 8-bit channels.
///
/// Every `u8` is a valid channel, so construction cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An HSV color.
///
/// * `h` - hue in degrees, `0..360`
/// * `s` - saturation in percent, `0..=100`
/// * `v` - value in percent, `0..=100`
///
/// Fields are private so a constructed `Hsv` is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    h: u16,
    s: u8,
    v: u8,
}

/// Errors returned when constructing an out-of-range [`Hsv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Hue is not below 360.
    HueOutOfRange(u16),

    /// Saturation is above 100.
    SaturationOutOfRange(u8),

    /// Value is above 100.
    ValueOutOfRange(u8),
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::HueOutOfRange(h) => {
                write!(f, "hue {} out of range (expected 0..{})", h, HUE_MAX)
            }
            ColorError::SaturationOutOfRange(s) => {
                write!(f, "saturation {} out of range (expected 0..={})", s, PERCENT_MAX)
            }
            ColorError::ValueOutOfRange(v) => {
                write!(f, "value {} out of range (expected 0..={})", v, PERCENT_MAX)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const AMBER: Rgb = Rgb::new(255, 191, 0);

/// Rounds a non-negative float half-up and saturates into `u8`.
#[inline]
fn round_u8(x: f32) -> u8 {
    (x + 0.5) as u8
}

impl Rgb {
    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to HSV.
    ///
    /// Hue is rounded to whole degrees (360 wraps to 0), saturation and value
    /// to whole percent. Greys get hue 0.
    pub fn to_hsv(self) -> Hsv {
        let hsv: palette::Hsv = palette::Hsv::from_color(self.to_srgb());

        let mut h = (hsv.hue.into_positive_degrees() + 0.5) as u16;
        if h >= HUE_MAX {
            h -= HUE_MAX;
        }
        let s = round_u8(hsv.saturation.clamp(0.0, 1.0) * PERCENT_MAX as f32);
        let v = round_u8(hsv.value.clamp(0.0, 1.0) * PERCENT_MAX as f32);

        Hsv { h, s, v }
    }

    /// Scales every channel by `brightness / 255`, rounding half-up.
    ///
    /// A brightness of 255 returns the color unchanged and 0 returns black.
    pub fn scaled(self, brightness: u8) -> Self {
        let scale = |c: u8| -> u8 {
            let product = c as u16 * brightness as u16;
            // (p + 127) / 255 is round-half-up for p / 255
            ((product + 127) / 255) as u8
        };
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Returns the color as `palette::Srgb<f32>` in the 0.0-1.0 range.
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Quantizes a `palette::Srgb<f32>` to 8-bit channels.
    ///
    /// Components are clamped to 0.0-1.0 before rounding half-up.
    pub fn from_srgb(color: Srgb) -> Self {
        let quantize = |c: f32| round_u8(c.clamp(0.0, 1.0) * 255.0);
        Self::new(
            quantize(color.red),
            quantize(color.green),
            quantize(color.blue),
        )
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl Hsv {
    /// Creates an HSV color, rejecting out-of-range channels.
    ///
    /// # Errors
    /// * `HueOutOfRange` - `h >= 360`
    /// * `SaturationOutOfRange` - `s > 100`
    /// * `ValueOutOfRange` - `v > 100`
    pub const fn new(h: u16, s: u8, v: u8) -> Result<Self, ColorError> {
        if h >= HUE_MAX {
            return Err(ColorError::HueOutOfRange(h));
        }
        if s > PERCENT_MAX {
            return Err(ColorError::SaturationOutOfRange(s));
        }
        if v > PERCENT_MAX {
            return Err(ColorError::ValueOutOfRange(v));
        }
        Ok(Self { h, s, v })
    }

    /// Hue in degrees.
    #[inline]
    pub const fn h(&self) -> u16 {
        self.h
    }

    /// Saturation in percent.
    #[inline]
    pub const fn s(&self) -> u8 {
        self.s
    }

    /// Value in percent.
    #[inline]
    pub const fn v(&self) -> u8 {
        self.v
    }

    /// Converts to 8-bit RGB, rounding each channel half-up.
    pub fn to_rgb(self) -> Rgb {
        let hsv: palette::Hsv = palette::Hsv::new(
            self.h as f32,
            self.s as f32 / PERCENT_MAX as f32,
            self.v as f32 / PERCENT_MAX as f32,
        );
        Rgb::from_srgb(Srgb::from_color(hsv))
    }
}

impl TryFrom<(u16, u8, u8)> for Hsv {
    type Error = ColorError;

    fn try_from((h, s, v): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(h, s, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_rounds_half_up() {
        // 255 * 128 / 255 = 128 exactly, 1 * 128 / 255 = 0.502 -> 1
        assert_eq!(Rgb::new(255, 1, 0).scaled(128), Rgb::new(128, 1, 0));
        // 1 * 127 / 255 = 0.498 -> 0
        assert_eq!(Rgb::new(1, 1, 1).scaled(127), BLACK);
    }

    #[test]
    fn scaled_extremes() {
        let c = Rgb::new(12, 200, 99);
        assert_eq!(c.scaled(255), c);
        assert_eq!(c.scaled(0), BLACK);
    }

    #[test]
    fn hsv_rejects_each_channel() {
        assert_eq!(Hsv::new(360, 0, 0), Err(ColorError::HueOutOfRange(360)));
        assert_eq!(Hsv::new(0, 101, 0), Err(ColorError::SaturationOutOfRange(101)));
        assert_eq!(Hsv::new(0, 0, 101), Err(ColorError::ValueOutOfRange(101)));
        assert!(Hsv::new(359, 100, 100).is_ok());
    }

    #[test]
    fn from_srgb_clamps() {
        let c = Rgb::from_srgb(Srgb::new(1.5, -0.2, 0.5));
        assert_eq!(c, Rgb::new(255, 0, 128));
    }
}
