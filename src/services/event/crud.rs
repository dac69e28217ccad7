use super::EventStore;
use crate::models::event::{Event, EventId};
use crate::models::resource::Resource;
use anyhow::{anyhow, Result};

impl EventStore {
    /// Add a new event and return its id.
    ///
    /// The id comes from the creation time in milliseconds, bumped past the
    /// previous id when two events are created within the same millisecond.
    pub fn add(&mut self, mut event: Event) -> Result<EventId> {
        self.check(&event).map_err(|e| anyhow!(e))?;

        let now = self.clock.now();
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;

        event.id = Some(id);
        event.created_at = Some(now);
        log::info!(
            "Added event {} \"{}\" on resource {}",
            id,
            event.title,
            event.resource_id
        );
        self.events.push(event);

        Ok(id)
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == Some(id))
    }

    /// Replace the stored event that has the same id.
    ///
    /// Unknown ids (for example an update racing a delete) and proposals
    /// that break the event invariants are ignored. Returns whether the
    /// collection changed.
    pub fn update(&mut self, event: &Event) -> bool {
        let Some(id) = event.id else {
            return false;
        };
        if let Err(reason) = self.check(event) {
            log::warn!("Ignoring invalid update for event {}: {}", id, reason);
            return false;
        }
        let Some(slot) = self.events.iter_mut().find(|e| e.id == Some(id)) else {
            log::debug!("Ignoring update for missing event {}", id);
            return false;
        };

        *slot = event.clone();
        true
    }

    /// Delete an event by ID; deleting a missing id does nothing.
    pub fn delete(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != Some(id));
        let removed = self.events.len() != before;
        if removed {
            log::info!("Deleted event {}", id);
        }
        removed
    }

    /// Append the next resource in the letter sequence.
    pub fn add_resource(&mut self) -> &Resource {
        let resource = Resource::next_after(&self.resources);
        log::info!("Added resource {} ({})", resource.name, resource.id);
        self.resources.push(resource);
        &self.resources[self.resources.len() - 1]
    }

    fn check(&self, event: &Event) -> Result<(), String> {
        event.validate()?;
        if event.duration() < self.min_duration {
            return Err(format!(
                "Event must last at least {} minutes",
                self.min_duration.num_minutes()
            ));
        }
        Ok(())
    }
}
