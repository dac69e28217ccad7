// Pointer capture
//
// While a gesture is active its event owns the pointer: move/release input
// is routed to that event only. Ownership is held by a guard and released
// when the guard is dropped, so every way out of a gesture (finish, cancel,
// delete, teardown) gives the pointer back.

use std::cell::Cell;
use std::rc::Rc;

use crate::models::event::EventId;

/// Single-pointer capture slot shared by all event controllers.
#[derive(Debug, Clone, Default)]
pub struct PointerCaptureRegistry {
    owner: Rc<Cell<Option<EventId>>>,
}

impl PointerCaptureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pointer for `event_id`.
    ///
    /// Fails while any event (including this one) already holds it.
    pub fn acquire(&self, event_id: EventId) -> Option<PointerCapture> {
        if self.owner.get().is_some() {
            return None;
        }
        self.owner.set(Some(event_id));
        log::trace!("Pointer captured by event {}", event_id);
        Some(PointerCapture {
            slot: Rc::clone(&self.owner),
            event_id,
        })
    }

    /// Event currently holding the pointer, if any.
    pub fn owner(&self) -> Option<EventId> {
        self.owner.get()
    }

    pub fn is_captured(&self) -> bool {
        self.owner.get().is_some()
    }
}

/// Proof of pointer ownership; releases the pointer on drop.
#[derive(Debug)]
pub struct PointerCapture {
    slot: Rc<Cell<Option<EventId>>>,
    event_id: EventId,
}

impl PointerCapture {
    pub fn event_id(&self) -> EventId {
        self.event_id
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        if self.slot.get() == Some(self.event_id) {
            self.slot.set(None);
            log::trace!("Pointer released by event {}", self.event_id);
        }
    }
}
