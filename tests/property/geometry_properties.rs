// Property-based tests for the geometry engine and resize validation
// Random pointer travel, scales and events must never break the event invariants

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Duration, Timelike};
use fixtures::{dates, events};
use proptest::prelude::*;
use resource_scheduler::geometry::snap::is_snapped;
use resource_scheduler::geometry::{compute_span, retarget, round_to_nearest_minutes};
use resource_scheduler::interaction::{GestureRules, ResizeContext, ResizeHandle};
use resource_scheduler::models::settings::SchedulerSettings;

fn rules(day_width: f32) -> GestureRules {
    GestureRules::from_settings(&SchedulerSettings {
        day_width,
        ..Default::default()
    })
    .unwrap()
}

fn handle_strategy() -> impl Strategy<Value = ResizeHandle> {
    prop_oneof![Just(ResizeHandle::Left), Just(ResizeHandle::Right)]
}

proptest! {
    /// Property: any pointer travel, however far, either is rejected or
    /// yields an event no shorter than the minimum with the moved edge on
    /// the snap grid
    #[test]
    fn prop_resize_respects_minimum_and_snap(
        day in 2..=20u32,
        hour in 0..24u32,
        minute in 0..60u32,
        length_minutes in 30..(5 * 24 * 60i64),
        handle in handle_strategy(),
        travel in prop_oneof![-2000.0f32..2000.0, prop::num::f32::NORMAL],
        day_width in 1.0f32..2000.0,
    ) {
        let start = dates::jan(day, hour, minute);
        let mut event = events::on("a", start, start + Duration::minutes(length_minutes));
        event.id = Some(1);

        let rules = rules(day_width);
        let context = ResizeContext::new(&event, handle, 0.0).unwrap();

        if let Some((new_start, new_end)) = context.propose(travel, &rules) {
            prop_assert!(new_end - new_start >= rules.min_duration);
            let moved = if handle.moves_start() { new_start } else { new_end };
            prop_assert!(is_snapped(moved, rules.snap_minutes));
            let fixed = if handle.moves_start() { new_end } else { new_start };
            prop_assert_eq!(fixed, context.fixed_edge());
        }
    }

    /// Property: snapping is idempotent
    #[test]
    fn prop_snap_is_idempotent(
        day in 1..=28u32,
        hour in 0..24u32,
        minute in 0..60u32,
        granularity in prop::sample::select(vec![1i64, 5, 15, 30, 60]),
    ) {
        let once = round_to_nearest_minutes(dates::jan(day, hour, minute), granularity);
        prop_assert_eq!(round_to_nearest_minutes(once, granularity), once);
    }

    /// Property: every event is at least one day wide on the grid
    #[test]
    fn prop_span_width_at_least_one_day(
        day in 1..=20u32,
        hour in 0..24u32,
        length_minutes in 1..(10 * 24 * 60i64),
    ) {
        let start = dates::jan(day, hour, 0);
        let span = compute_span(start, start + Duration::minutes(length_minutes));
        prop_assert!(span.width_days >= 1.0);
        prop_assert!((0.0..1.0).contains(&span.offset_days));
    }

    /// Property: dragging keeps hour, minute and duration
    #[test]
    fn prop_retarget_preserves_time_of_day_and_duration(
        from_day in 1..=28u32,
        to_day in 1..=28u32,
        hour in 0..24u32,
        minute in 0..60u32,
        length_minutes in 30..(3 * 24 * 60i64),
    ) {
        let start = dates::jan(from_day, hour, minute);
        let event = events::on("a", start, start + Duration::minutes(length_minutes));

        let moved = retarget(&event, "b", dates::jan_date(to_day)).unwrap();
        prop_assert_eq!(moved.start.hour(), hour);
        prop_assert_eq!(moved.start.minute(), minute);
        prop_assert_eq!(moved.start.date_naive(), dates::jan_date(to_day));
        prop_assert_eq!(moved.duration(), event.duration());
        prop_assert_eq!(moved.resource_id.as_str(), "b");
    }
}
