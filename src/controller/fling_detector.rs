//! Gesture listener that writes scroll and fling notifications to the log

use super::log_view::EventLogHandle;
use crate::gesture::GestureListener;
use crate::input::MotionEvent;
use crate::tracking::VelocityReader;

/// Entry written for every fling
pub const FLING_ENTRY: &str = "in onFling";

/// Logs scroll steps with the touch listener's latest velocity, and flings
///
/// Scroll entries report the velocity sample published by the touch listener,
/// not the distances the classifier passes in. The sample may be stale: it is
/// whatever the most recent move event produced.
pub struct FlingDetector {
    log: EventLogHandle,
    velocity: VelocityReader,
}

impl FlingDetector {
    /// Create a listener writing to `log` and reading velocity from `velocity`
    pub fn new(log: EventLogHandle, velocity: VelocityReader) -> Self {
        Self { log, velocity }
    }
}

/// Log line for a scroll step
pub fn format_scroll_entry(x: f32, y: f32) -> String {
    format!("onScroll velocity = ({x:.6}, {y:.6})")
}

impl GestureListener for FlingDetector {
    fn on_scroll(
        &mut self,
        _down: &MotionEvent,
        _current: &MotionEvent,
        _distance_x: f32,
        _distance_y: f32,
    ) -> bool {
        let sample = self.velocity.current();
        self.log.append(&format_scroll_entry(sample.x, sample.y));
        false
    }

    fn on_fling(
        &mut self,
        _down: &MotionEvent,
        _up: &MotionEvent,
        _velocity_x: f32,
        _velocity_y: f32,
    ) -> bool {
        self.log.append(FLING_ENTRY);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::{VelocitySample, velocity_channel};

    fn event() -> MotionEvent {
        MotionEvent::down(0.0, 0.0, 0)
    }

    #[test]
    fn test_scroll_entry_format() {
        assert_eq!(
            format_scroll_entry(12.5, -3.0),
            "onScroll velocity = (12.500000, -3.000000)"
        );
        assert_eq!(format_scroll_entry(0.0, 0.0), "onScroll velocity = (0.000000, 0.000000)");
    }

    #[test]
    fn test_scroll_reports_tracker_velocity_not_distance() {
        let log = EventLogHandle::new();
        let (writer, reader) = velocity_channel();
        let mut detector = FlingDetector::new(log.clone(), reader);

        writer.store(VelocitySample {
            pointer_id: Some(0),
            x: 250.0,
            y: -125.5,
        });
        let handled = detector.on_scroll(&event(), &event(), 999.0, 999.0);

        assert!(!handled);
        assert_eq!(
            log.entries(),
            vec!["onScroll velocity = (250.000000, -125.500000)"]
        );
    }

    #[test]
    fn test_scroll_before_any_move_reports_zero() {
        let log = EventLogHandle::new();
        let (_writer, reader) = velocity_channel();
        let mut detector = FlingDetector::new(log.clone(), reader);

        detector.on_scroll(&event(), &event(), 1.0, 1.0);
        assert_eq!(log.entries(), vec!["onScroll velocity = (0.000000, 0.000000)"]);
    }

    #[test]
    fn test_fling_logs_fixed_line_regardless_of_velocity() {
        let log = EventLogHandle::new();
        let (_writer, reader) = velocity_channel();
        let mut detector = FlingDetector::new(log.clone(), reader);

        for (vx, vy) in [(0.0, 0.0), (8_000.0, -8_000.0), (-51.0, 3.0)] {
            log.clear();
            assert!(detector.on_fling(&event(), &event(), vx, vy));
            assert_eq!(log.entries(), vec![FLING_ENTRY]);
        }
    }
}
