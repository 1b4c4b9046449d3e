//! Motion event definition
//!
//! A `MotionEvent` is one timestamped pointer sample. Only a single contact is
//! modelled, so there is no separate pointer-down/pointer-up for secondary
//! contacts.

use std::fmt;

/// Identifier of a tracked contact (finger or mouse pointer)
pub type PointerId = u32;

/// Phase of the contact lifecycle an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionAction {
    /// Contact began
    Down,
    /// Contact moved while pressed
    Move,
    /// Contact lifted normally
    Up,
    /// Contact aborted by the windowing system
    Cancel,
}

impl fmt::Display for MotionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Down => "down",
            Self::Move => "move",
            Self::Up => "up",
            Self::Cancel => "cancel",
        };
        f.write_str(name)
    }
}

/// A single pointer sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEvent {
    /// Lifecycle phase
    pub action: MotionAction,
    /// Contact that produced the sample
    pub pointer_id: PointerId,
    /// Horizontal position in logical pixels
    pub x: f32,
    /// Vertical position in logical pixels
    pub y: f32,
    /// Event time in milliseconds, monotonic within one session
    pub event_time_ms: i64,
}

impl MotionEvent {
    /// Create a new event
    pub fn new(
        action: MotionAction,
        pointer_id: PointerId,
        x: f32,
        y: f32,
        event_time_ms: i64,
    ) -> Self {
        Self {
            action,
            pointer_id,
            x,
            y,
            event_time_ms,
        }
    }

    /// Convenience constructor for a `Down` event on pointer 0
    pub fn down(x: f32, y: f32, event_time_ms: i64) -> Self {
        Self::new(MotionAction::Down, 0, x, y, event_time_ms)
    }

    /// Convenience constructor for a `Move` event on pointer 0
    pub fn moved(x: f32, y: f32, event_time_ms: i64) -> Self {
        Self::new(MotionAction::Move, 0, x, y, event_time_ms)
    }

    /// Convenience constructor for an `Up` event on pointer 0
    pub fn up(x: f32, y: f32, event_time_ms: i64) -> Self {
        Self::new(MotionAction::Up, 0, x, y, event_time_ms)
    }

    /// Convenience constructor for a `Cancel` event on pointer 0
    pub fn cancel(x: f32, y: f32, event_time_ms: i64) -> Self {
        Self::new(MotionAction::Cancel, 0, x, y, event_time_ms)
    }
}
