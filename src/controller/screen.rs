//! Screen assembly
//!
//! [`Screen::create`] is the single place where the log view, the fling
//! detector, the gesture classifier and the touch listener are built and
//! wired together. The GUI only talks to the returned bundle.

use super::fling_detector::FlingDetector;
use super::log_view::{EventLogHandle, LogSnapshot};
use super::touch_listener::TouchListener;
use crate::config::AppConfig;
use crate::gesture::GestureDetector;
use crate::input::MotionEvent;
use crate::tracking::{VelocityTrackerPool, velocity_channel};
use tracing::info;

/// All components of the gesture log screen
pub struct Screen {
    log: EventLogHandle,
    touch_listener: TouchListener,
}

impl Screen {
    /// Build and wire every component of the screen
    pub fn create(config: &AppConfig) -> Self {
        let log = EventLogHandle::new();
        let (velocity_writer, velocity_reader) = velocity_channel();

        let fling_detector = FlingDetector::new(log.clone(), velocity_reader);
        let detector = GestureDetector::new(fling_detector, config.gestures.clone());
        let touch_listener = TouchListener::new(
            log.clone(),
            VelocityTrackerPool::new(),
            velocity_writer,
            config.gestures.velocity_units,
            detector,
        );

        info!(
            "Screen created (touch slop {}, fling velocity {}..{}, velocity units {} ms)",
            config.gestures.touch_slop,
            config.gestures.min_fling_velocity,
            config.gestures.max_fling_velocity,
            config.gestures.velocity_units
        );

        Self {
            log,
            touch_listener,
        }
    }

    /// Deliver a touch event aimed at the log view
    pub fn on_touch(&mut self, event: &MotionEvent) -> bool {
        self.touch_listener.on_touch(event)
    }

    /// The "clear" button was pressed
    pub fn on_clear_clicked(&self) {
        info!("Clearing event log");
        self.log.clear();
    }

    /// Handle to the log shown on screen
    pub fn log(&self) -> &EventLogHandle {
        &self.log
    }

    /// The touch listener bound to the log view
    pub fn touch_listener(&self) -> &TouchListener {
        &self.touch_listener
    }

    /// What the log view should currently display
    pub fn snapshot(&self) -> LogSnapshot {
        self.log.snapshot()
    }
}
