// Event Resize
//
// Moving one edge of an event with the pointer while the other edge stays
// locked. Candidates are computed from the bounds captured when the resize
// started plus the pointer travel, snapped, and then validated.

use chrono::{DateTime, Local};

use super::GestureRules;
use crate::geometry::{propose_edge_move, round_to_nearest_minutes};
use crate::models::event::{Event, EventId};

/// Which edge of the event is being resized
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    /// Left edge - adjusts the start
    Left,
    /// Right edge - adjusts the end
    Right,
}

/// Width of the grab zone at each end of an event, in pixels
pub const HANDLE_SIZE: f32 = 8.0;

impl ResizeHandle {
    pub fn moves_start(&self) -> bool {
        matches!(self, ResizeHandle::Left)
    }

    /// Handle under `pointer_x` for an event drawn between `left` and `right`.
    ///
    /// Events narrower than two grab zones split their width between the
    /// two handles.
    pub fn hit_test(pointer_x: f32, left: f32, right: f32) -> Option<Self> {
        if pointer_x < left || pointer_x > right {
            return None;
        }
        let zone = HANDLE_SIZE.min((right - left) / 2.0);
        if pointer_x <= left + zone {
            Some(ResizeHandle::Left)
        } else if pointer_x >= right - zone {
            Some(ResizeHandle::Right)
        } else {
            None
        }
    }
}

/// Context for an active resize operation
#[derive(Clone, Debug)]
pub struct ResizeContext {
    pub event_id: EventId,
    pub handle: ResizeHandle,
    /// Pointer x when the handle was grabbed
    pub start_pointer_x: f32,
    pub original_start: DateTime<Local>,
    pub original_end: DateTime<Local>,
}

impl ResizeContext {
    pub fn new(event: &Event, handle: ResizeHandle, pointer_x: f32) -> Option<Self> {
        let event_id = event.id?;
        Some(Self {
            event_id,
            handle,
            start_pointer_x: pointer_x,
            original_start: event.start,
            original_end: event.end,
        })
    }

    /// Edge under the pointer, as it was at gesture start
    pub fn snapshot_edge(&self) -> DateTime<Local> {
        match self.handle {
            ResizeHandle::Left => self.original_start,
            ResizeHandle::Right => self.original_end,
        }
    }

    /// Edge that stays put for the whole gesture
    pub fn fixed_edge(&self) -> DateTime<Local> {
        match self.handle {
            ResizeHandle::Left => self.original_end,
            ResizeHandle::Right => self.original_start,
        }
    }

    /// Snapped edge time for the pointer at `pointer_x`.
    ///
    /// `None` when the travel lands outside the representable time range.
    pub fn candidate(&self, pointer_x: f32, rules: &GestureRules) -> Option<DateTime<Local>> {
        let delta = rules.mapper.time_delta(pointer_x - self.start_pointer_x)?;
        let moved = self.snapshot_edge().checked_add_signed(delta)?;
        Some(round_to_nearest_minutes(moved, rules.snap_minutes))
    }

    /// Validated bounds for `pointer_x`, or `None` when the candidate is rejected.
    pub fn propose(
        &self,
        pointer_x: f32,
        rules: &GestureRules,
    ) -> Option<(DateTime<Local>, DateTime<Local>)> {
        let candidate = self.candidate(pointer_x, rules)?;
        propose_edge_move(
            self.original_start,
            self.original_end,
            self.handle,
            candidate,
            rules.min_duration,
        )
    }
}
