//! Gesture classification module
//!
//! [`GestureDetector`] turns a stream of motion events into scroll and fling
//! notifications delivered to a [`GestureListener`]. Thresholds come from
//! [`GestureSettings`](crate::config::GestureSettings).

pub mod detector;
pub mod listener;

pub use detector::GestureDetector;
pub use listener::GestureListener;
