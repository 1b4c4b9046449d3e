//! Scroll and fling classification
//!
//! A small state machine over one contact:
//!
//! ```text
//! Down ──► tap region ──(moved past touch slop)──► scrolling ──(Up, fast)──► fling
//!              │                                        │
//!              └──────────────(Up / Cancel)─────────────┴──► idle
//! ```
//!
//! Every scroll step and the final fling are reported to a [`GestureListener`].

use super::listener::GestureListener;
use crate::config::GestureSettings;
use crate::input::{MotionAction, MotionEvent};
use crate::tracking::VelocityTracker;
use tracing::{debug, trace};

/// Fling velocities are reported in pixels per second
const FLING_VELOCITY_UNITS: u32 = 1000;

/// Smallest distance (per axis) that produces another scroll notification
/// once scrolling has started
const MIN_SCROLL_STEP: f32 = 1.0;

/// Recognizes scroll and fling gestures and notifies a listener
pub struct GestureDetector<L> {
    listener: L,
    settings: GestureSettings,
    /// Own tracker used only for the fling decision
    velocity_tracker: VelocityTracker,
    /// `Down` that started the current gesture
    down_event: Option<MotionEvent>,
    /// Position of the last reported scroll step
    last_focus: (f32, f32),
    /// Still within touch slop of the down position
    in_tap_region: bool,
}

impl<L: GestureListener> GestureDetector<L> {
    /// Create a detector that reports to `listener`
    pub fn new(listener: L, settings: GestureSettings) -> Self {
        Self {
            listener,
            settings,
            velocity_tracker: VelocityTracker::new(),
            down_event: None,
            last_focus: (0.0, 0.0),
            in_tap_region: false,
        }
    }

    /// The listener notifications are delivered to
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Whether a contact is currently being classified
    pub fn is_tracking(&self) -> bool {
        self.down_event.is_some()
    }

    /// Whether the current contact has been recognized as a scroll
    pub fn is_scrolling(&self) -> bool {
        self.down_event.is_some() && !self.in_tap_region
    }

    /// Feed one event; returns what the notified listener returned, or
    /// `false` when no notification fired
    pub fn on_touch_event(&mut self, event: &MotionEvent) -> bool {
        match event.action {
            MotionAction::Down => {
                self.velocity_tracker.clear();
                self.velocity_tracker.add_movement(event);
                self.down_event = Some(*event);
                self.last_focus = (event.x, event.y);
                self.in_tap_region = true;
                trace!("Gesture started at ({}, {})", event.x, event.y);
                false
            }
            MotionAction::Move => {
                let Some(down) = self.down_event else {
                    trace!("Ignoring move without a preceding down");
                    return false;
                };
                self.velocity_tracker.add_movement(event);
                self.handle_move(&down, event)
            }
            MotionAction::Up => {
                let Some(down) = self.down_event else {
                    trace!("Ignoring up without a preceding down");
                    return false;
                };
                self.velocity_tracker.add_movement(event);
                let handled = self.handle_up(&down, event);
                self.reset();
                handled
            }
            MotionAction::Cancel => {
                if self.down_event.is_some() {
                    debug!("Gesture cancelled");
                }
                self.reset();
                false
            }
        }
    }

    fn handle_move(&mut self, down: &MotionEvent, event: &MotionEvent) -> bool {
        let scroll_x = self.last_focus.0 - event.x;
        let scroll_y = self.last_focus.1 - event.y;

        if self.in_tap_region {
            let dx = event.x - down.x;
            let dy = event.y - down.y;
            let slop = self.settings.touch_slop;
            if dx * dx + dy * dy <= slop * slop {
                return false;
            }
            debug!("Contact left touch slop, scrolling");
            self.in_tap_region = false;
        } else if scroll_x.abs() < MIN_SCROLL_STEP && scroll_y.abs() < MIN_SCROLL_STEP {
            return false;
        }

        self.last_focus = (event.x, event.y);
        self.listener.on_scroll(down, event, scroll_x, scroll_y)
    }

    fn handle_up(&mut self, down: &MotionEvent, event: &MotionEvent) -> bool {
        if self.in_tap_region {
            return false;
        }

        self.velocity_tracker.compute_current_velocity_with_max(
            FLING_VELOCITY_UNITS,
            self.settings.max_fling_velocity,
        );
        let (velocity_x, velocity_y) = self.velocity_tracker.velocity(event.pointer_id);
        let min = self.settings.min_fling_velocity;

        if velocity_x.abs() > min || velocity_y.abs() > min {
            debug!("Fling recognized: ({}, {})", velocity_x, velocity_y);
            self.listener.on_fling(down, event, velocity_x, velocity_y)
        } else {
            trace!("Scroll released below fling threshold");
            false
        }
    }

    fn reset(&mut self) {
        self.velocity_tracker.clear();
        self.down_event = None;
        self.in_tap_region = false;
    }
}
