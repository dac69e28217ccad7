// Test fixtures - reusable test data
// Provides consistent dates, events and schedulers across the test files

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use resource_scheduler::models::event::Event;
use resource_scheduler::models::palette::CyclicPalette;
use resource_scheduler::models::resource::default_resources;
use resource_scheduler::models::settings::SchedulerSettings;
use resource_scheduler::services::event::Clock;
use resource_scheduler::services::scheduler::Scheduler;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Local wall-clock instant; January dates avoid DST transitions
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .expect("fixture instant exists in the local zone")
    }

    pub fn jan(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
        at(2025, 1, day, hour, minute)
    }

    pub fn jan_date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn on(resource: &str, start: DateTime<Local>, end: DateTime<Local>) -> Event {
        Event::builder()
            .resource(resource)
            .title("Fixture")
            .start(start)
            .end(end)
            .build()
            .unwrap()
    }

    /// Resource A, Jan 10 09:00 to Jan 13 17:00
    pub fn multi_day() -> Event {
        on("a", dates::jan(10, 9, 0), dates::jan(13, 17, 0))
    }

    /// Resource A, Jan 10 09:00 to 13:00
    pub fn morning_block() -> Event {
        on("a", dates::jan(10, 9, 0), dates::jan(10, 13, 0))
    }
}

/// Clock pinned to one instant
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Scheduler with resources A-I, a pinned clock and no events
pub fn scheduler_with(settings: SchedulerSettings) -> Scheduler {
    Scheduler::with_parts(
        settings,
        Box::new(FixedClock(dates::jan(1, 8, 0))),
        Box::new(CyclicPalette),
    )
    .unwrap()
    .with_resources(default_resources())
}

pub fn scheduler() -> Scheduler {
    scheduler_with(SchedulerSettings::default())
}
