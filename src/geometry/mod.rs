//! Event geometry engine.
//!
//! Pure functions that turn event bounds into grid spans and decide whether
//! a proposed edge move or drop target yields a valid event. Nothing here
//! touches the event collection: results are proposals that the caller
//! commits through the store.

pub mod mapper;
pub mod snap;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Timelike};

use crate::interaction::ResizeHandle;
use crate::models::event::Event;
use crate::utils::date::{local_datetime, millis_since_midnight, MS_PER_DAY};

pub use mapper::{PixelTimeMapper, MIN_DAY_WIDTH};
pub use snap::{round_to_nearest_minutes, DEFAULT_SNAP_MINUTES};

/// Shortest event the engine will produce.
pub const MIN_EVENT_DURATION_MINUTES: i64 = 30;

/// Horizontal placement of an event in day units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventSpan {
    /// Fraction of the start day elapsed before the event begins
    pub offset_days: f64,
    /// Visual width; never below one day so short events stay clickable
    pub width_days: f64,
}

impl EventSpan {
    pub fn offset_px(&self, mapper: &PixelTimeMapper) -> f32 {
        mapper.pixels_for_days(self.offset_days)
    }

    pub fn width_px(&self, mapper: &PixelTimeMapper) -> f32 {
        mapper.pixels_for_days(self.width_days)
    }
}

pub fn compute_span(start: DateTime<Local>, end: DateTime<Local>) -> EventSpan {
    let day = MS_PER_DAY as f64;
    let offset_days = millis_since_midnight(start) as f64 / day;
    let width_days = ((end - start).num_milliseconds() as f64 / day).max(1.0);
    EventSpan {
        offset_days,
        width_days,
    }
}

/// Validate moving one edge of `[start, end]` to `candidate`.
///
/// The opposite edge stays fixed. Returns the new bounds, or `None` when the
/// candidate would reorder the edges or undercut `min_duration`.
pub fn propose_edge_move(
    start: DateTime<Local>,
    end: DateTime<Local>,
    handle: ResizeHandle,
    candidate: DateTime<Local>,
    min_duration: Duration,
) -> Option<(DateTime<Local>, DateTime<Local>)> {
    match handle {
        ResizeHandle::Right => {
            (candidate > start && candidate - start >= min_duration).then_some((start, candidate))
        }
        ResizeHandle::Left => {
            (candidate < end && end - candidate >= min_duration).then_some((candidate, end))
        }
    }
}

/// Move `event` onto another `(resource, date)` cell.
///
/// The event keeps its hour and minute of day on the new date and its exact
/// duration. Returns `None` when that wall-clock time does not exist on the
/// target date.
pub fn retarget(event: &Event, resource_id: &str, date: NaiveDate) -> Option<Event> {
    let time_of_day = NaiveTime::from_hms_opt(event.start.hour(), event.start.minute(), 0)?;
    let start = local_datetime(date, time_of_day)?;
    let end = start + event.duration();

    let mut moved = event.with_times(start, end);
    moved.resource_id = resource_id.to_string();
    Some(moved)
}
