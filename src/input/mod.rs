//! Pointer input module
//!
//! Defines the platform-neutral motion event that flows from the GUI into the
//! touch listener and the gesture classifier.

pub mod motion_event;

pub use motion_event::{MotionAction, MotionEvent, PointerId};
