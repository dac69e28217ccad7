// Time snapping
// Rounds instants to a fixed minute granularity measured from the Unix epoch.

use chrono::{DateTime, Duration, Local};

/// Default snapping unit for resize candidates.
pub const DEFAULT_SNAP_MINUTES: i64 = 15;

/// Round `instant` to the nearest multiple of `minutes`, half-up on milliseconds.
///
/// A non-positive granularity, or a rounded value outside the representable
/// range, leaves the instant untouched.
pub fn round_to_nearest_minutes(instant: DateTime<Local>, minutes: i64) -> DateTime<Local> {
    let step = minutes.saturating_mul(60_000);
    if step <= 0 {
        return instant;
    }

    let millis = instant.timestamp_millis();
    let rounded = (millis + step / 2).div_euclid(step) * step;
    Duration::try_milliseconds(rounded - millis)
        .and_then(|offset| instant.checked_add_signed(offset))
        .unwrap_or(instant)
}

/// True when `instant` already sits on a `minutes` boundary.
pub fn is_snapped(instant: DateTime<Local>, minutes: i64) -> bool {
    let step = minutes.saturating_mul(60_000);
    step > 0 && instant.timestamp_millis().rem_euclid(step) == 0
}
