// Service module exports

pub mod event;
pub mod scheduler;
pub mod settings;
