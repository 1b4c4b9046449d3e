//! `GestureLog` - Touch gesture and fling velocity logger
//!
//! Shows a newest-first log of raw touch events, scroll steps and flings.
//! A `TouchListener` tracks per-contact velocity with a pooled
//! `VelocityTracker` and forwards events to a `GestureDetector`, whose
//! `FlingDetector` listener reports the latest velocity sample into the
//! `EventLog` rendered by the GUI.
//!
//! Everything runs on the GUI event-loop thread; no component spawns threads.

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod input;
pub mod tracking;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use error::{GestureLogError, Result};
