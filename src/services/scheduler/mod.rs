//! Scheduler command surface.
//!
//! The presentation layer talks to the core only through [`Scheduler`]: it
//! issues commands (add/update/delete event, select date, add resource),
//! forwards pointer gestures, and reads back the committed events and their
//! spans. The scheduler owns the [`EventStore`] and one gesture controller
//! per event that is currently being dragged or resized.

mod seed;

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::error::ConfigError;
use crate::geometry::{compute_span, EventSpan, PixelTimeMapper};
use crate::interaction::{
    EventInteraction, GestureRules, InteractionState, PointerCaptureRegistry, ResizeHandle,
    VisualState,
};
use crate::models::event::{Event, EventId};
use crate::models::palette::{CyclicPalette, PalettePolicy};
use crate::models::resource::Resource;
use crate::models::settings::SchedulerSettings;
use crate::services::event::{Clock, EventStore, SystemClock};
use crate::utils::date::start_of_day;

pub use seed::{sample_events, seed_defaults};

pub struct Scheduler {
    store: EventStore,
    settings: SchedulerSettings,
    rules: GestureRules,
    palette: Box<dyn PalettePolicy>,
    captures: PointerCaptureRegistry,
    interactions: HashMap<EventId, EventInteraction>,
    selected_date: Option<NaiveDate>,
}

impl Scheduler {
    /// Build a scheduler on the wall clock with the cyclic palette.
    ///
    /// Fails on invalid settings (for example a non-positive day width).
    pub fn new(settings: SchedulerSettings) -> Result<Self, ConfigError> {
        Self::with_parts(settings, Box::new(SystemClock), Box::new(CyclicPalette))
    }

    pub fn with_parts(
        settings: SchedulerSettings,
        clock: Box<dyn Clock>,
        palette: Box<dyn PalettePolicy>,
    ) -> Result<Self, ConfigError> {
        let rules = GestureRules::from_settings(&settings)?;
        let store = EventStore::with_clock(clock).with_min_duration(rules.min_duration);
        Ok(Self {
            store,
            settings,
            rules,
            palette,
            captures: PointerCaptureRegistry::new(),
            interactions: HashMap::new(),
            selected_date: None,
        })
    }

    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.store = self.store.with_resources(resources);
        self
    }

    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    pub fn rules(&self) -> &GestureRules {
        &self.rules
    }

    pub fn mapper(&self) -> &PixelTimeMapper {
        &self.rules.mapper
    }

    // ── Commands ───────────────────────────────────────────────────────

    /// Create a default event in the `(resource, date)` cell.
    ///
    /// The event starts at local midnight, spans the configured default
    /// (24 h), carries the default title and takes its colours from the
    /// palette policy. Unknown resources produce nothing.
    pub fn add_event(&mut self, resource_id: &str, date: NaiveDate) -> Option<EventId> {
        if self.store.find_resource(resource_id).is_none() {
            log::warn!("Cannot add event: unknown resource '{}'", resource_id);
            return None;
        }
        let start = start_of_day(date)?;
        let entry = self.palette.pick(self.store.len());

        let created = Event::builder()
            .resource(resource_id)
            .title(self.settings.default_event_title.as_str())
            .start(start)
            .end(start + self.settings.default_event_span())
            .color(entry.color)
            .hover_color(entry.hover)
            .build()
            .map_err(|e| anyhow!(e))
            .and_then(|event| self.store.add(event));

        match created {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("Failed to add event on {} / {}: {}", resource_id, date, e);
                None
            }
        }
    }

    /// Add a fully specified event (seed data, imports from the shell).
    pub fn insert_event(&mut self, event: Event) -> Result<EventId> {
        self.store.add(event)
    }

    /// Replace an event; unknown ids and invalid events are ignored.
    pub fn update_event(&mut self, event: &Event) -> bool {
        self.store.update(event)
    }

    /// Delete an event, cancelling any gesture in progress on it first.
    pub fn delete_event(&mut self, id: EventId) -> bool {
        if let Some(mut interaction) = self.interactions.remove(&id) {
            interaction.cancel();
        }
        self.store.delete(id)
    }

    /// Advisory: remember the date the user picked for navigation.
    pub fn select_date(&mut self, date: NaiveDate) {
        log::debug!("Selected date {}", date);
        self.selected_date = Some(date);
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn add_resource(&mut self) -> Resource {
        self.store.add_resource().clone()
    }

    // ── Gestures ───────────────────────────────────────────────────────

    pub fn begin_drag(&mut self, id: EventId, pointer_x: f32) -> bool {
        let Some(event) = self.store.get(id).cloned() else {
            return false;
        };
        let started = self
            .interactions
            .entry(id)
            .or_insert_with(|| EventInteraction::new(id))
            .begin_drag(&event, pointer_x, &self.captures);
        self.prune_idle();
        started
    }

    pub fn begin_resize(&mut self, id: EventId, handle: ResizeHandle, pointer_x: f32) -> bool {
        let Some(event) = self.store.get(id).cloned() else {
            return false;
        };
        let started = self
            .interactions
            .entry(id)
            .or_insert_with(|| EventInteraction::new(id))
            .begin_resize(&event, handle, pointer_x, &self.captures);
        self.prune_idle();
        started
    }

    /// Event whose gesture currently holds the pointer.
    pub fn active_gesture(&self) -> Option<EventId> {
        self.captures.owner()
    }

    fn active_interaction_mut(&mut self) -> Option<&mut EventInteraction> {
        let id = self.captures.owner()?;
        self.interactions.get_mut(&id)
    }

    /// The dragged event is hovering over `(date, resource)`.
    pub fn drag_over(&mut self, date: NaiveDate, resource_id: &str) {
        if let Some(interaction) = self.active_interaction_mut() {
            interaction.drag_over(date, resource_id);
        }
    }

    /// Drop the dragged event on a cell and commit the move.
    ///
    /// Returns the committed event. Drops on unknown resources end the drag
    /// without moving anything.
    pub fn drop_on(&mut self, date: NaiveDate, resource_id: &str) -> Option<Event> {
        let known_resource = self.store.find_resource(resource_id).is_some();
        let proposal = self.active_interaction_mut()?.drop_on(date, resource_id);
        self.prune_idle();

        let moved = proposal.filter(|_| known_resource)?;
        self.store.update(&moved).then_some(moved)
    }

    /// Drag released outside any valid target.
    pub fn end_drag(&mut self) {
        if let Some(interaction) = self.active_interaction_mut() {
            if interaction.state() == InteractionState::Dragging {
                interaction.pointer_up();
            }
        }
        self.prune_idle();
    }

    /// Route pointer movement to the active gesture.
    ///
    /// During a resize every accepted candidate is committed right away so
    /// the grid shows the live result; the committed event is returned.
    pub fn pointer_move(&mut self, pointer_x: f32) -> Option<Event> {
        let id = self.captures.owner()?;
        let rules = self.rules;
        let (start, end) = self.interactions.get_mut(&id)?.pointer_move(pointer_x, &rules)?;

        let resized = self.store.get(id)?.with_times(start, end);
        self.store.update(&resized).then_some(resized)
    }

    /// Pointer released: finish a resize, or cancel a drag that was never
    /// dropped.
    pub fn pointer_up(&mut self) -> bool {
        let ended = self
            .active_interaction_mut()
            .map(EventInteraction::pointer_up)
            .unwrap_or(false);
        self.prune_idle();
        ended
    }

    /// Abandon every gesture (e.g. the grid is being torn down).
    pub fn cancel_gestures(&mut self) {
        for interaction in self.interactions.values_mut() {
            interaction.cancel();
        }
        self.interactions.clear();
    }

    fn prune_idle(&mut self) {
        self.interactions.retain(|_, interaction| !interaction.is_idle());
    }

    // ── Read-outs ──────────────────────────────────────────────────────

    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.store.get(id)
    }

    pub fn resources(&self) -> &[Resource] {
        self.store.resources()
    }

    pub fn events_in_cell(&self, resource_id: &str, date: NaiveDate) -> Vec<&Event> {
        self.store.query(resource_id, date)
    }

    pub fn span_of(&self, id: EventId) -> Option<EventSpan> {
        self.store
            .get(id)
            .map(|event| compute_span(event.start, event.end))
    }

    pub fn interaction_state(&self, id: EventId) -> InteractionState {
        self.interactions
            .get(&id)
            .map(EventInteraction::state)
            .unwrap_or(InteractionState::Idle)
    }

    pub fn visual_state(&self, id: EventId) -> VisualState {
        VisualState::for_state(self.interaction_state(id))
    }

    /// Where the dragged event would land on the hovered cell.
    pub fn drag_preview(&self) -> Option<Event> {
        let id = self.captures.owner()?;
        self.interactions.get(&id)?.drag_context()?.preview()
    }

    /// Events still carrying the default title, or created moments ago,
    /// are highlighted by the grid.
    pub fn is_new_event(&self, event: &Event) -> bool {
        event.title == self.settings.default_event_title
            || event.is_recently_created(self.store.now(), self.settings.new_event_highlight())
    }
}
