//! Velocity tracking module
//!
//! Provides the two-axis [`VelocityTracker`], the pool it is loaned from, and
//! the single-writer cell that publishes the latest velocity sample.

pub mod pool;
pub mod sample;
pub mod velocity_tracker;

pub use pool::{PooledTracker, VelocityTrackerPool};
pub use sample::{VelocityReader, VelocitySample, VelocityWriter, velocity_channel};
pub use velocity_tracker::VelocityTracker;
