// Module exports for models

pub mod event;
pub mod palette;
pub mod resource;
pub mod settings;
