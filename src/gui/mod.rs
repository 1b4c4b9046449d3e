//! GUI module
//!
//! Provides the Slint-based window: a touch-sensitive log area and a "clear" button.

pub mod gui_controller;

pub use gui_controller::GuiController;
