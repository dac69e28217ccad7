// Resource Scheduler Application
// Main entry point

use resource_scheduler::models::settings::SchedulerSettings;
use resource_scheduler::services::scheduler::{seed_defaults, Scheduler};
use resource_scheduler::services::settings::SettingsService;
use resource_scheduler::ui_egui::SchedulerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Resource Scheduler");

    let settings = SettingsService::from_default_location().load_or_default();
    let scheduler = Scheduler::new(settings).or_else(|e| {
        log::warn!("{}; falling back to default settings", e);
        Scheduler::new(SchedulerSettings::default())
    });
    let scheduler = match scheduler {
        Ok(scheduler) => seed_defaults(scheduler),
        Err(e) => {
            log::error!("Failed to set up scheduler: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Resource Scheduler")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resource Scheduler",
        options,
        Box::new(|cc| Ok(Box::new(SchedulerApp::new(cc, scheduler)))),
    )
}
