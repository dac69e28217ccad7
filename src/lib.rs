// Resource Scheduler Library
// Exports all modules for testing and reuse

pub mod error;
pub mod geometry;
pub mod interaction;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
