// Event Drag
//
// Moving an event onto another (resource, day) cell. The drag keeps an
// immutable snapshot of the event taken when the gesture started; drop
// targets are evaluated against that snapshot, never against live state.

use chrono::{Duration, NaiveDate};

use crate::geometry;
use crate::models::event::{Event, EventId};

#[derive(Clone, Debug)]
pub struct DragContext {
    pub event_id: EventId,
    /// Event as it was when the drag began
    pub snapshot: Event,
    pub hovered_date: Option<NaiveDate>,
    pub hovered_resource: Option<String>,
}

impl DragContext {
    pub fn from_event(event: &Event) -> Option<Self> {
        let event_id = event.id?;
        Some(Self {
            event_id,
            snapshot: event.clone(),
            hovered_date: Some(event.start.date_naive()),
            hovered_resource: Some(event.resource_id.clone()),
        })
    }

    pub fn duration(&self) -> Duration {
        self.snapshot.duration()
    }

    pub fn update_hover(&mut self, date: NaiveDate, resource_id: &str) {
        self.hovered_date = Some(date);
        self.hovered_resource = Some(resource_id.to_string());
    }

    /// Where the event would land if dropped on `(date, resource_id)`.
    pub fn retarget_to(&self, date: NaiveDate, resource_id: &str) -> Option<Event> {
        geometry::retarget(&self.snapshot, resource_id, date)
    }

    /// Landing position for the currently hovered cell.
    pub fn preview(&self) -> Option<Event> {
        match (self.hovered_date, self.hovered_resource.as_deref()) {
            (Some(date), Some(resource_id)) => self.retarget_to(date, resource_id),
            _ => None,
        }
    }
}
