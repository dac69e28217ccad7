// Pixel-to-time mapping
// Converts horizontal pointer travel into time using a fixed day width.

use chrono::Duration;

use crate::error::ConfigError;
use crate::utils::date::MS_PER_DAY;

/// Narrowest day column accepted, in pixels.
pub const MIN_DAY_WIDTH: f32 = 1.0;

/// Maps horizontal pixels to time: `day_width` pixels represent 24 hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTimeMapper {
    day_width: f32,
}

impl PixelTimeMapper {
    /// Build a mapper for the given day width.
    ///
    /// Non-finite widths and widths below [`MIN_DAY_WIDTH`] are rejected up
    /// front so the per-gesture path never has to deal with them.
    pub fn new(day_width: f32) -> Result<Self, ConfigError> {
        if !day_width.is_finite() || day_width < MIN_DAY_WIDTH {
            return Err(ConfigError::InvalidDayWidth(day_width));
        }
        Ok(Self { day_width })
    }

    pub fn day_width(&self) -> f32 {
        self.day_width
    }

    pub fn ms_per_pixel(&self) -> f64 {
        MS_PER_DAY as f64 / f64::from(self.day_width)
    }

    /// Time delta for a signed pixel delta measured from the gesture start.
    ///
    /// `None` when the travel does not fit in a `Duration`.
    pub fn time_delta(&self, pixel_delta: f32) -> Option<Duration> {
        let millis = (f64::from(pixel_delta) * self.ms_per_pixel()).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return None;
        }
        Duration::try_milliseconds(millis as i64)
    }

    /// Horizontal extent of a fractional number of days.
    pub fn pixels_for_days(&self, days: f64) -> f32 {
        (days * f64::from(self.day_width)) as f32
    }
}
