//! Shared velocity sample
//!
//! The touch listener is the only writer of the current velocity sample. Other
//! components get a [`VelocityReader`], which can read the sample but never
//! change it.

use crate::input::PointerId;
use parking_lot::Mutex;
use std::sync::Arc;

/// Most recently computed velocity of the active contact, in pixels per
/// velocity unit window (per second by default)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocitySample {
    /// Contact the sample was computed for; `None` before the first move
    pub pointer_id: Option<PointerId>,
    /// Horizontal velocity
    pub x: f32,
    /// Vertical velocity
    pub y: f32,
}

/// Create a connected writer/reader pair holding a zero sample
pub fn velocity_channel() -> (VelocityWriter, VelocityReader) {
    let cell = Arc::new(Mutex::new(VelocitySample::default()));
    (
        VelocityWriter {
            cell: Arc::clone(&cell),
        },
        VelocityReader { cell },
    )
}

/// Write half; owned by the touch listener
#[derive(Debug)]
pub struct VelocityWriter {
    cell: Arc<Mutex<VelocitySample>>,
}

impl VelocityWriter {
    /// Replace the current sample
    pub fn store(&self, sample: VelocitySample) {
        *self.cell.lock() = sample;
    }

    /// Current sample as seen by readers
    pub fn current(&self) -> VelocitySample {
        *self.cell.lock()
    }
}

/// Read-only half; injected into components that report velocity
#[derive(Debug, Clone)]
pub struct VelocityReader {
    cell: Arc<Mutex<VelocitySample>>,
}

impl VelocityReader {
    /// Current sample
    pub fn current(&self) -> VelocitySample {
        *self.cell.lock()
    }
}
