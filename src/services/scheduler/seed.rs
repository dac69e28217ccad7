// First-launch content: resources A-I and two sample events in January 2025.

use chrono::{DateTime, Local, TimeZone};

use super::Scheduler;
use crate::models::event::Event;
use crate::models::palette::EVENT_PALETTE;
use crate::models::resource::default_resources;

fn local(year: i32, month: u32, day: u32, hour: u32) -> Option<DateTime<Local>> {
    Local.with_ymd_and_hms(year, month, day, hour, 0, 0).earliest()
}

pub fn sample_events() -> Vec<Event> {
    let specs = [
        ("a", "Event 1", (10, 9), (13, 17), EVENT_PALETTE[0].color),
        ("b", "Event 2", (11, 10), (12, 16), EVENT_PALETTE[1].color),
    ];

    specs
        .into_iter()
        .filter_map(|(resource, title, (sd, sh), (ed, eh), color)| {
            Event::builder()
                .resource(resource)
                .title(title)
                .start(local(2025, 1, sd, sh)?)
                .end(local(2025, 1, ed, eh)?)
                .color(color)
                .build()
                .ok()
        })
        .collect()
}

/// Populate an empty scheduler with the default resources and samples.
pub fn seed_defaults(scheduler: Scheduler) -> Scheduler {
    let mut scheduler = scheduler.with_resources(default_resources());
    for event in sample_events() {
        if let Err(e) = scheduler.insert_event(event) {
            log::warn!("Skipping sample event: {}", e);
        }
    }
    scheduler
}
