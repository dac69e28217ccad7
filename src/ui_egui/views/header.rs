//! Month navigation header above the grid.

use chrono::NaiveDate;
use egui::RichText;
use egui_extras::DatePickerButton;

/// What the user asked for from the header this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    PreviousMonth,
    NextMonth,
    Today,
    SelectDate(NaiveDate),
    AddResource,
}

/// Render the header. `picker_date` backs the date picker between frames.
pub fn render_header(
    ui: &mut egui::Ui,
    current_month: NaiveDate,
    picker_date: &mut NaiveDate,
) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("◀").on_hover_text("Previous month").clicked() {
            action = Some(HeaderAction::PreviousMonth);
        }

        ui.label(
            RichText::new(current_month.format("%B %Y").to_string())
                .size(18.0)
                .strong(),
        );

        if ui.button("▶").on_hover_text("Next month").clicked() {
            action = Some(HeaderAction::NextMonth);
        }

        ui.separator();

        let before = *picker_date;
        ui.add(DatePickerButton::new(picker_date).id_source("scheduler_date_picker"));
        if *picker_date != before {
            action = Some(HeaderAction::SelectDate(*picker_date));
        }

        if ui.button("Today").clicked() {
            action = Some(HeaderAction::Today);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ Add Resource").clicked() {
                action = Some(HeaderAction::AddResource);
            }
        });
    });

    action
}
