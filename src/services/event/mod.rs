//! Event collection entry point.
//! The in-memory store is the single owner of events and resources; CRUD
//! and query operations live in focused submodules.

use chrono::{DateTime, Duration, Local};

use crate::geometry::MIN_EVENT_DURATION_MINUTES;
use crate::models::event::{Event, EventId};
use crate::models::resource::Resource;

pub mod crud;
pub mod queries;

/// Source of "now" for id assignment and creation stamps.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Authoritative, session-lifetime collection of events and resources.
pub struct EventStore {
    events: Vec<Event>,
    resources: Vec<Resource>,
    min_duration: Duration,
    last_id: EventId,
    clock: Box<dyn Clock>,
}

impl EventStore {
    /// Create an empty store on the wall clock
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            events: Vec::new(),
            resources: Vec::new(),
            min_duration: Duration::minutes(MIN_EVENT_DURATION_MINUTES),
            last_id: 0,
            clock,
        }
    }

    /// Shortest event accepted by `add` and `update`
    pub fn with_min_duration(mut self, min_duration: Duration) -> Self {
        self.min_duration = min_duration;
        self
    }

    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources;
        self
    }

    pub fn min_duration(&self) -> Duration {
        self.min_duration
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;

    fn fixed_clock(at: DateTime<Local>) -> Box<MockClock> {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(at);
        Box::new(clock)
    }

    fn jan(d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, d, h, 0, 0).unwrap()
    }

    fn sample_event(resource: &str, start: DateTime<Local>, hours: i64) -> Event {
        Event::new(resource, "Test Event", start, start + Duration::hours(hours)).unwrap()
    }

    #[test]
    fn test_add_assigns_creation_time_id() {
        let now = jan(1, 12);
        let mut store = EventStore::with_clock(fixed_clock(now));

        let id = store.add(sample_event("a", jan(10, 9), 2)).unwrap();
        assert_eq!(id, now.timestamp_millis());

        let stored = store.get(id).unwrap();
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.created_at, Some(now));
    }

    #[test]
    fn test_ids_stay_unique_on_a_frozen_clock() {
        let mut store = EventStore::with_clock(fixed_clock(jan(1, 12)));

        let first = store.add(sample_event("a", jan(10, 9), 2)).unwrap();
        let second = store.add(sample_event("a", jan(10, 9), 2)).unwrap();
        let third = store.add(sample_event("b", jan(11, 9), 2)).unwrap();

        assert!(first < second && second < third);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_rejects_invalid_event() {
        let mut store = EventStore::with_clock(fixed_clock(jan(1, 12)));
        let mut event = sample_event("a", jan(10, 9), 2);
        event.end = event.start + Duration::minutes(10);

        assert!(store.add(event).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_replaces_matching_entry() {
        let mut store = EventStore::with_clock(fixed_clock(jan(1, 12)));
        let id = store.add(sample_event("a", jan(10, 9), 2)).unwrap();

        let mut changed = store.get(id).unwrap().clone();
        changed.title = "Renamed".to_string();
        changed.end = jan(10, 15);

        assert!(store.update(&changed));
        assert_eq!(store.get(id), Some(&changed));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = EventStore::with_clock(fixed_clock(jan(1, 12)));
        store.add(sample_event("a", jan(10, 9), 2)).unwrap();
        let before = store.events().to_vec();

        let mut stranger = sample_event("a", jan(12, 9), 2);
        stranger.id = Some(999);
        assert!(!store.update(&stranger));

        stranger.id = None;
        assert!(!store.update(&stranger));
        assert_eq!(store.events(), before.as_slice());
    }

    #[test]
    fn test_update_rejects_too_short_event() {
        let mut store = EventStore::with_clock(fixed_clock(jan(1, 12)));
        let id = store.add(sample_event("a", jan(10, 9), 2)).unwrap();

        let original = store.get(id).unwrap().clone();
        let short = original.with_times(original.start, original.start + Duration::minutes(15));

        assert!(!store.update(&short));
        assert_eq!(store.get(id), Some(&original));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = EventStore::with_clock(fixed_clock(jan(1, 12)));
        let id = store.add(sample_event("a", jan(10, 9), 2)).unwrap();

        assert!(store.delete(id));
        assert!(!store.delete(id));
        assert!(!store.delete(12345));
        assert!(store.is_empty());
    }

    #[test]
    fn test_query_matches_resource_and_start_day() {
        let mut store = EventStore::with_clock(fixed_clock(jan(1, 12)));
        let morning = store.add(sample_event("a", jan(10, 1), 1)).unwrap();
        let late = store.add(sample_event("a", jan(10, 23), 3)).unwrap();
        store.add(sample_event("b", jan(10, 9), 1)).unwrap();
        store.add(sample_event("a", jan(11, 9), 1)).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let ids: Vec<_> = store.query("a", date).iter().filter_map(|e| e.id).collect();
        assert_eq!(ids, vec![morning, late]);
    }

    #[test]
    fn test_add_resource_appends_next_letter() {
        let mut store = EventStore::new().with_resources(vec![
            Resource::from_label("A"),
            Resource::from_label("B"),
        ]);

        let added = store.add_resource().clone();
        assert_eq!(added, Resource::from_label("C"));
        assert_eq!(store.resources().len(), 3);
        assert_eq!(store.find_resource("c"), Some(&added));
    }
}
