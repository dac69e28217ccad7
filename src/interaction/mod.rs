//! Per-event interaction state machine.
//!
//! Each event gets an [`EventInteraction`] that is either idle, dragging or
//! resizing one edge. Controllers never touch the event collection: they
//! hand back proposals that the scheduler commits through the store.
//! Active gestures hold a [`PointerCapture`] guard, so leaving the gesture
//! by any path releases the pointer.

pub mod capture;
pub mod drag;
pub mod resize;

use chrono::{DateTime, Duration, Local, NaiveDate};

use crate::error::ConfigError;
use crate::geometry::PixelTimeMapper;
use crate::models::event::{Event, EventId};
use crate::models::settings::SchedulerSettings;

pub use capture::{PointerCapture, PointerCaptureRegistry};
pub use drag::DragContext;
pub use resize::{ResizeContext, ResizeHandle, HANDLE_SIZE};

/// Scale and rules applied to every gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureRules {
    pub mapper: PixelTimeMapper,
    pub snap_minutes: i64,
    pub min_duration: Duration,
}

impl GestureRules {
    pub fn from_settings(settings: &SchedulerSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            mapper: PixelTimeMapper::new(settings.day_width)?,
            snap_minutes: settings.snap_minutes,
            min_duration: settings.min_duration(),
        })
    }
}

/// Observable state of an event's controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Dragging,
    Resizing(ResizeHandle),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerCursor {
    Default,
    Move,
    ResizeHorizontal,
}

/// How the presentation layer should draw an event, derived from its state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub scale: f32,
    /// Draw above other events
    pub elevated: bool,
    pub cursor: PointerCursor,
}

impl VisualState {
    pub const IDLE: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        elevated: false,
        cursor: PointerCursor::Default,
    };

    pub fn for_state(state: InteractionState) -> Self {
        match state {
            InteractionState::Idle => Self::IDLE,
            InteractionState::Dragging => Self {
                opacity: 0.5,
                scale: 1.0,
                elevated: true,
                cursor: PointerCursor::Move,
            },
            InteractionState::Resizing(_) => Self {
                opacity: 0.8,
                scale: 1.02,
                elevated: true,
                cursor: PointerCursor::ResizeHorizontal,
            },
        }
    }
}

#[derive(Debug)]
enum Gesture {
    Drag {
        context: DragContext,
        _capture: PointerCapture,
    },
    Resize {
        context: ResizeContext,
        _capture: PointerCapture,
    },
}

/// Gesture controller for a single event.
#[derive(Debug)]
pub struct EventInteraction {
    event_id: EventId,
    gesture: Option<Gesture>,
}

impl EventInteraction {
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            gesture: None,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn state(&self) -> InteractionState {
        match &self.gesture {
            None => InteractionState::Idle,
            Some(Gesture::Drag { .. }) => InteractionState::Dragging,
            Some(Gesture::Resize { context, .. }) => InteractionState::Resizing(context.handle),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.gesture.is_none()
    }

    pub fn visual_state(&self) -> VisualState {
        VisualState::for_state(self.state())
    }

    pub fn drag_context(&self) -> Option<&DragContext> {
        match &self.gesture {
            Some(Gesture::Drag { context, .. }) => Some(context),
            _ => None,
        }
    }

    /// Idle → Dragging. Refused if busy, if `event` is another event, or if
    /// some other gesture holds the pointer.
    pub fn begin_drag(
        &mut self,
        event: &Event,
        pointer_x: f32,
        captures: &PointerCaptureRegistry,
    ) -> bool {
        if !self.accepts_gesture_for(event) {
            return false;
        }
        let Some(context) = DragContext::from_event(event) else {
            return false;
        };
        let Some(capture) = captures.acquire(self.event_id) else {
            return false;
        };
        log::debug!("Event {} drag started at x={}", self.event_id, pointer_x);
        self.gesture = Some(Gesture::Drag {
            context,
            _capture: capture,
        });
        true
    }

    /// Idle → Resizing(handle).
    pub fn begin_resize(
        &mut self,
        event: &Event,
        handle: ResizeHandle,
        pointer_x: f32,
        captures: &PointerCaptureRegistry,
    ) -> bool {
        if !self.accepts_gesture_for(event) {
            return false;
        }
        let Some(context) = ResizeContext::new(event, handle, pointer_x) else {
            return false;
        };
        let Some(capture) = captures.acquire(self.event_id) else {
            return false;
        };
        log::debug!("Event {} resize started on {:?} edge", self.event_id, handle);
        self.gesture = Some(Gesture::Resize {
            context,
            _capture: capture,
        });
        true
    }

    fn accepts_gesture_for(&self, event: &Event) -> bool {
        self.is_idle() && event.id == Some(self.event_id)
    }

    /// Record the cell currently under a dragged event.
    pub fn drag_over(&mut self, date: NaiveDate, resource_id: &str) {
        if let Some(Gesture::Drag { context, .. }) = &mut self.gesture {
            context.update_hover(date, resource_id);
        }
    }

    /// Dragging → Idle with a drop target. Returns the retargeted event to
    /// commit, or `None` when not dragging or the target time is invalid.
    pub fn drop_on(&mut self, date: NaiveDate, resource_id: &str) -> Option<Event> {
        match self.gesture.take() {
            Some(Gesture::Drag { context, .. }) => {
                let proposal = context.retarget_to(date, resource_id);
                log::debug!(
                    "Event {} dropped on {} / {} ({})",
                    self.event_id,
                    resource_id,
                    date,
                    if proposal.is_some() { "accepted" } else { "rejected" }
                );
                proposal
            }
            other => {
                self.gesture = other;
                None
            }
        }
    }

    /// Pointer moved while this event holds the pointer.
    ///
    /// While resizing, returns the new bounds when the candidate is valid;
    /// rejected candidates return `None` and leave the state unchanged.
    pub fn pointer_move(
        &mut self,
        pointer_x: f32,
        rules: &GestureRules,
    ) -> Option<(DateTime<Local>, DateTime<Local>)> {
        match &self.gesture {
            Some(Gesture::Resize { context, .. }) => context.propose(pointer_x, rules),
            // Drags follow cells through `drag_over`, not raw pointer travel
            Some(Gesture::Drag { .. }) | None => None,
        }
    }

    /// Pointer released. Resizes finish (live updates are already
    /// committed); drags without a drop are cancelled. Returns whether a
    /// gesture ended.
    pub fn pointer_up(&mut self) -> bool {
        match self.gesture.take() {
            Some(Gesture::Resize { context, .. }) => {
                log::debug!("Event {} resize finished", context.event_id);
                true
            }
            Some(Gesture::Drag { context, .. }) => {
                log::debug!("Event {} drag ended without a drop", context.event_id);
                true
            }
            None => false,
        }
    }

    /// Abandon any gesture; the pointer capture goes with it.
    pub fn cancel(&mut self) {
        if self.gesture.take().is_some() {
            log::debug!("Event {} gesture cancelled", self.event_id);
        }
    }
}
