//! Error types for scheduler setup.

use thiserror::Error;

/// Configuration problems detected while building the scheduler.
///
/// These are fatal at setup time; nothing in the gesture path produces them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Day width must be at least one pixel, got {0}")]
    InvalidDayWidth(f32),

    #[error("Snap granularity must be between one minute and one year, got {0} minutes")]
    InvalidSnapMinutes(i64),

    #[error("Minimum event duration must be between one minute and one year, got {0} minutes")]
    InvalidMinDuration(i64),

    #[error("Default event span must be between one hour and one year, got {0} hours")]
    InvalidDefaultSpan(i64),

    #[error("Default event span ({span_minutes} min) is shorter than the minimum duration ({min_minutes} min)")]
    DefaultSpanBelowMinimum { span_minutes: i64, min_minutes: i64 },

    #[error("New event highlight must be between zero seconds and one year, got {0} seconds")]
    InvalidHighlight(i64),

    #[error("Default event title must not be blank")]
    BlankDefaultTitle,
}
