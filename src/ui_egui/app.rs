use chrono::{Duration, Local, NaiveDate};

use super::confirm::{ConfirmAction, ConfirmDialogState, ConfirmResult};
use super::theme::GridTheme;
use super::views::header::{render_header, HeaderAction};
use super::views::resource_grid::render_resource_grid;
use crate::services::scheduler::Scheduler;
use crate::utils::date::{first_of_month, month_dates, next_month, previous_month};

pub struct SchedulerApp {
    scheduler: Scheduler,
    /// First day of the month shown in the grid
    current_month: NaiveDate,
    /// Value bound to the header's date picker
    picker_date: NaiveDate,
    confirm_dialog: ConfirmDialogState,
    /// Date to bring into view on the next frame
    pending_scroll: Option<NaiveDate>,
    theme: GridTheme,
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("scheduler_header").show(ctx, |ui| {
            ui.add_space(4.0);
            let action = render_header(ui, self.current_month, &mut self.picker_date);
            if let Some(action) = action {
                self.handle_header_action(action);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let dates = month_dates(self.current_month);
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let response = render_resource_grid(
                        ui,
                        &mut self.scheduler,
                        &dates,
                        &self.theme,
                        self.pending_scroll,
                    );
                    if response.scrolled {
                        self.pending_scroll = None;
                    }
                    if let Some(date) = response.date_clicked {
                        self.handle_header_action(HeaderAction::SelectDate(date));
                    }
                    if let Some((event_id, event_title)) = response.delete_requested {
                        self.confirm_dialog.request(ConfirmAction::DeleteEvent {
                            event_id,
                            event_title,
                        });
                    }
                });
        });

        self.handle_confirm_dialog(ctx);

        // Keep the "new event" highlight expiring without further input
        let highlight = self.scheduler.settings().new_event_highlight();
        if highlight > Duration::zero() {
            if let Ok(period) = highlight.to_std() {
                ctx.request_repaint_after(period);
            }
        }
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl SchedulerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, scheduler: Scheduler) -> Self {
        let theme = GridTheme::for_visuals(&cc.egui_ctx.style().visuals);
        theme.apply_to_context(&cc.egui_ctx);

        let today = Local::now().date_naive();
        Self {
            scheduler,
            current_month: first_of_month(today),
            picker_date: today,
            confirm_dialog: ConfirmDialogState::new(),
            pending_scroll: Some(today),
            theme,
        }
    }

    fn handle_header_action(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::PreviousMonth => {
                self.current_month = previous_month(self.current_month);
            }
            HeaderAction::NextMonth => {
                self.current_month = next_month(self.current_month);
            }
            HeaderAction::Today => {
                let today = Local::now().date_naive();
                self.jump_to(today);
            }
            HeaderAction::SelectDate(date) => self.jump_to(date),
            HeaderAction::AddResource => {
                let resource = self.scheduler.add_resource();
                log::debug!("Header added resource {}", resource.name);
            }
        }
    }

    fn jump_to(&mut self, date: NaiveDate) {
        self.scheduler.select_date(date);
        self.current_month = first_of_month(date);
        self.picker_date = date;
        self.pending_scroll = Some(date);
    }

    fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(id) = self.scheduler.active_gesture() {
            log::info!("Window closing mid-gesture; abandoning gesture on event {}", id);
        }
        self.scheduler.cancel_gestures();
    }

    fn handle_confirm_dialog(&mut self, ctx: &egui::Context) {
        if self.confirm_dialog.render(ctx) != ConfirmResult::Confirmed {
            return;
        }
        if let Some(ConfirmAction::DeleteEvent {
            event_id,
            event_title,
        }) = self.confirm_dialog.take_action()
        {
            if self.scheduler.delete_event(event_id) {
                log::info!("Deleted event: {} (ID: {})", event_title, event_id);
            }
        }
    }
}
