//! Gesture notification trait

use crate::input::MotionEvent;

/// Receiver of gesture notifications from a [`GestureDetector`](super::GestureDetector)
///
/// Both callbacks get the `Down` event that started the gesture and the event
/// that triggered the notification. The return value tells the detector
/// whether the notification was fully handled.
pub trait GestureListener {
    /// Called for every step of a recognized scroll
    ///
    /// `distance_x`/`distance_y` are the distance moved since the previous
    /// scroll notification, measured as previous position minus current
    /// position.
    fn on_scroll(
        &mut self,
        down: &MotionEvent,
        current: &MotionEvent,
        distance_x: f32,
        distance_y: f32,
    ) -> bool;

    /// Called once when a scroll is released fast enough to count as a fling
    ///
    /// Velocities are in pixels per second along each axis.
    fn on_fling(
        &mut self,
        down: &MotionEvent,
        up: &MotionEvent,
        velocity_x: f32,
        velocity_y: f32,
    ) -> bool;
}
