// Settings module
// Tunables for the grid scale and the event/gesture rules

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::MIN_DAY_WIDTH;

/// Upper bound for any minute-based rule (one year).
const MAX_RULE_MINUTES: i64 = 365 * 24 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Pixels representing one 24-hour day column
    pub day_width: f32,
    /// Snapping granularity for resize candidates
    pub snap_minutes: i64,
    /// Shortest allowed event
    pub min_duration_minutes: i64,
    /// Span of an event created by double-click
    pub default_event_hours: i64,
    pub default_event_title: String,
    /// How long a freshly created event stays highlighted
    pub new_event_highlight_secs: i64,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            day_width: 100.0,
            snap_minutes: 15,
            min_duration_minutes: 30,
            default_event_hours: 24,
            default_event_title: "New Event".to_string(),
            new_event_highlight_secs: 5,
        }
    }
}

impl SchedulerSettings {
    /// Reject values that would make the geometry engine meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.day_width.is_finite() || self.day_width < MIN_DAY_WIDTH {
            return Err(ConfigError::InvalidDayWidth(self.day_width));
        }
        if self.snap_minutes <= 0 || self.snap_minutes > MAX_RULE_MINUTES {
            return Err(ConfigError::InvalidSnapMinutes(self.snap_minutes));
        }
        if self.min_duration_minutes <= 0 || self.min_duration_minutes > MAX_RULE_MINUTES {
            return Err(ConfigError::InvalidMinDuration(self.min_duration_minutes));
        }
        if self.default_event_hours <= 0 || self.default_event_hours > MAX_RULE_MINUTES / 60 {
            return Err(ConfigError::InvalidDefaultSpan(self.default_event_hours));
        }
        let span_minutes = self.default_event_hours.saturating_mul(60);
        if span_minutes < self.min_duration_minutes {
            return Err(ConfigError::DefaultSpanBelowMinimum {
                span_minutes,
                min_minutes: self.min_duration_minutes,
            });
        }
        if self.default_event_title.trim().is_empty() {
            return Err(ConfigError::BlankDefaultTitle);
        }
        if !(0..=MAX_RULE_MINUTES * 60).contains(&self.new_event_highlight_secs) {
            return Err(ConfigError::InvalidHighlight(self.new_event_highlight_secs));
        }
        Ok(())
    }

    pub fn min_duration(&self) -> Duration {
        Duration::minutes(self.min_duration_minutes)
    }

    pub fn default_event_span(&self) -> Duration {
        Duration::hours(self.default_event_hours)
    }

    pub fn new_event_highlight(&self) -> Duration {
        Duration::try_seconds(self.new_event_highlight_secs).unwrap_or_else(Duration::zero)
    }
}
