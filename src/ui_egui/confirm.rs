//! Confirmation dialog for destructive actions.

use egui::{Context, RichText};

use crate::models::event::EventId;

/// Actions that need the user's confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    DeleteEvent { event_id: EventId, event_title: String },
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete Event",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteEvent { event_title, .. } => {
                format!("Are you sure you want to delete \"{}\"?", event_title)
            }
        }
    }

    pub fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete",
        }
    }
}

/// Result of a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Cancelled,
    /// Dialog is still open (or was never opened)
    Pending,
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request confirmation for an action, replacing any pending one
    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    pub fn pending_action(&self) -> Option<&ConfirmAction> {
        self.pending_action.as_ref()
    }

    pub fn cancel(&mut self) {
        self.pending_action = None;
    }

    /// Take the pending action (consuming it)
    pub fn take_action(&mut self) -> Option<ConfirmAction> {
        self.pending_action.take()
    }

    /// Render the modal. A confirmed action stays pending so the caller can
    /// `take_action` it; a cancelled one is dropped here.
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut result = ConfirmResult::Pending;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(280.0);
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.label(action.message());
                });

                ui.add_space(12.0);
                ui.separator();

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm_button = egui::Button::new(
                        RichText::new(action.confirm_text()).color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(180, 60, 60));

                    if ui.add(confirm_button).clicked() {
                        result = ConfirmResult::Confirmed;
                    }

                    ui.add_space(10.0);

                    if ui.button("Cancel").clicked() {
                        result = ConfirmResult::Cancelled;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
        }

        if result == ConfirmResult::Cancelled {
            self.pending_action = None;
        }

        result
    }
}
