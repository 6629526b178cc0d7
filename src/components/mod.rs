pub mod app;
pub mod board;
pub mod controls_panel;
