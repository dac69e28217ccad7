pub mod header;
pub mod resource_grid;
