//! Touch listener for the log view
//!
//! Receives every raw event aimed at the log, keeps a pooled velocity tracker
//! for the lifetime of a contact, publishes the latest velocity sample and
//! forwards the event unchanged to the gesture classifier.

use super::fling_detector::FlingDetector;
use super::log_view::EventLogHandle;
use crate::gesture::GestureDetector;
use crate::input::{MotionAction, MotionEvent};
use crate::tracking::{PooledTracker, VelocitySample, VelocityTrackerPool, VelocityWriter};
use tracing::{debug, trace, warn};

/// Entry written for every event the listener receives
pub const TOUCH_ENTRY: &str = "in onTouch";

/// Intercepts touch events, tracks velocity and drives the gesture classifier
pub struct TouchListener {
    log: EventLogHandle,
    pool: VelocityTrackerPool,
    /// Tracker held from `Down` until `Up`/`Cancel`
    tracker: Option<PooledTracker>,
    velocity: VelocityWriter,
    velocity_units: u32,
    detector: GestureDetector<FlingDetector>,
}

impl TouchListener {
    /// Create a listener
    ///
    /// `velocity_units` is the window velocities are normalized to, in
    /// milliseconds (1000 for pixels per second).
    pub fn new(
        log: EventLogHandle,
        pool: VelocityTrackerPool,
        velocity: VelocityWriter,
        velocity_units: u32,
        detector: GestureDetector<FlingDetector>,
    ) -> Self {
        Self {
            log,
            pool,
            tracker: None,
            velocity,
            velocity_units,
            detector,
        }
    }

    /// Handle one event. Always returns `true` so the rest of the contact
    /// keeps being delivered here.
    pub fn on_touch(&mut self, event: &MotionEvent) -> bool {
        self.log.append(TOUCH_ENTRY);

        match event.action {
            MotionAction::Down => self.begin_contact(event),
            MotionAction::Move => self.track_move(event),
            MotionAction::Up => {
                if let Some(tracker) = self.tracker.as_mut() {
                    tracker.add_movement(event);
                }
                self.release_tracker(event.action);
            }
            MotionAction::Cancel => self.release_tracker(event.action),
        }

        let handled = self.detector.on_touch_event(event);
        debug!(
            "Forwarded {} event to gesture detector (handled: {}, tracking: {}, scrolling: {})",
            event.action,
            handled,
            self.detector.is_tracking(),
            self.detector.is_scrolling()
        );
        true
    }

    /// Current velocity sample
    pub fn velocity(&self) -> VelocitySample {
        self.velocity.current()
    }

    /// Whether a velocity tracker is currently held
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_some()
    }

    /// The pool trackers are obtained from
    pub fn pool(&self) -> &VelocityTrackerPool {
        &self.pool
    }

    fn begin_contact(&mut self, event: &MotionEvent) {
        if let Some(tracker) = self.tracker.as_mut() {
            trace!("Resetting held velocity tracker");
            tracker.clear();
        }
        let pool = &self.pool;
        let tracker = self.tracker.get_or_insert_with(|| pool.obtain());
        tracker.add_movement(event);
    }

    fn track_move(&mut self, event: &MotionEvent) {
        let Some(tracker) = self.tracker.as_mut() else {
            warn!("Move event without an active contact; velocity not updated");
            return;
        };

        tracker.add_movement(event);
        tracker.compute_current_velocity(self.velocity_units);
        let (x, y) = tracker.velocity(event.pointer_id);
        self.velocity.store(VelocitySample {
            pointer_id: Some(event.pointer_id),
            x,
            y,
        });
        trace!("Velocity for pointer {}: ({}, {})", event.pointer_id, x, y);
    }

    fn release_tracker(&mut self, action: MotionAction) {
        match self.tracker.take() {
            Some(tracker) => {
                tracker.recycle();
                trace!("Velocity tracker released on {}", action);
            }
            None => warn!("{} event without an active contact", action),
        }
    }
}
