//! Panels composing the main window.

pub mod controls_panel;
pub mod editor_panel;
pub mod file_panel;
pub mod preview_panel;
pub mod save_panel;
