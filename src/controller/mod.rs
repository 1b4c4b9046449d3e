//! Screen controller module
//!
//! Holds the components behind the gesture log screen and the wiring between
//! them.
//!
//! # Event Flow
//!
//! ```text
//! pointer event → TouchListener ──(updates VelocitySample, logs "in onTouch")
//!                       │
//!                       ▼
//!               GestureDetector → FlingDetector ──(reads VelocitySample)
//!                                       │
//!                                       ▼
//!                                   EventLog → GUI
//! ```
//!
//! # Components
//!
//! - `TouchListener`: owns the pooled velocity tracker for the active contact
//!   and the write half of the velocity sample
//! - `FlingDetector`: the gesture listener; holds only a read-only
//!   `VelocityReader`
//! - `EventLog`: newest-first text with a highlight on the latest entry
//! - `Screen`: builds the above and exposes the touch and clear entry points

pub mod fling_detector;
pub mod log_view;
pub mod screen;
pub mod touch_listener;

pub use fling_detector::FlingDetector;
pub use log_view::{EventLog, EventLogHandle, HighlightSpan, LogSnapshot, StyledSegment};
pub use screen::Screen;
pub use touch_listener::TouchListener;
