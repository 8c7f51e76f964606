pub mod actions;
pub mod core;
pub mod registry;
pub mod ui;
