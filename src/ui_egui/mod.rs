mod app;
mod confirm;
pub mod theme;
mod views;

pub use app::SchedulerApp;
