pub mod commands;
pub mod core;
pub mod modules;
pub mod ui;
