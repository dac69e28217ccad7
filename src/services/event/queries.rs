use super::EventStore;
use crate::models::event::Event;
use crate::models::resource::Resource;
use chrono::NaiveDate;

impl EventStore {
    /// Every event, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events of `resource_id` that start on `date` (time of day ignored).
    /// This is the per-cell filter the grid renders from.
    pub fn query(&self, resource_id: &str, date: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.resource_id == resource_id && event.starts_on(date))
            .collect()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn find_resource(&self, resource_id: &str) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.id == resource_id)
    }
}
