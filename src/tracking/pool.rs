//! Velocity tracker pool
//!
//! Trackers are obtained from a pool and returned to it when the contact that
//! needed them ends. The returned [`PooledTracker`] hands its tracker back on
//! drop, so every exit path (lift, cancel, listener teardown) releases it.

use super::velocity_tracker::VelocityTracker;
use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::trace;

/// Number of idle trackers kept for reuse; extras are dropped
const MAX_IDLE_TRACKERS: usize = 2;

#[derive(Debug, Default)]
struct PoolInner {
    idle: Mutex<Vec<VelocityTracker>>,
    outstanding: AtomicUsize,
}

/// Shared pool of reusable velocity trackers
///
/// Cloning the pool yields another handle to the same storage.
#[derive(Debug, Clone, Default)]
pub struct VelocityTrackerPool {
    inner: Arc<PoolInner>,
}

impl VelocityTrackerPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Take an empty tracker from the pool, allocating one if none is idle
    pub fn obtain(&self) -> PooledTracker {
        let tracker = self.inner.idle.lock().pop().unwrap_or_default();
        let outstanding = self.inner.outstanding.fetch_add(1, Ordering::Relaxed) + 1;
        trace!("Velocity tracker obtained ({} outstanding)", outstanding);

        PooledTracker {
            tracker: Some(tracker),
            pool: Arc::clone(&self.inner),
        }
    }

    /// Number of trackers currently handed out
    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::Relaxed)
    }

    /// Number of trackers waiting for reuse
    pub fn idle(&self) -> usize {
        self.inner.idle.lock().len()
    }
}

/// A tracker on loan from a [`VelocityTrackerPool`]
///
/// Dereferences to [`VelocityTracker`]. Dropping it (or calling
/// [`recycle`](Self::recycle)) clears the tracker and returns it to the pool.
#[derive(Debug)]
pub struct PooledTracker {
    tracker: Option<VelocityTracker>,
    pool: Arc<PoolInner>,
}

impl PooledTracker {
    /// Return the tracker to its pool
    pub fn recycle(self) {
        drop(self);
    }
}

impl Deref for PooledTracker {
    type Target = VelocityTracker;

    fn deref(&self) -> &Self::Target {
        self.tracker
            .as_ref()
            .expect("tracker is present until the handle is dropped")
    }
}

impl DerefMut for PooledTracker {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.tracker
            .as_mut()
            .expect("tracker is present until the handle is dropped")
    }
}

impl Drop for PooledTracker {
    fn drop(&mut self) {
        let Some(mut tracker) = self.tracker.take() else {
            return;
        };
        tracker.clear();

        let mut idle = self.pool.idle.lock();
        if idle.len() < MAX_IDLE_TRACKERS {
            idle.push(tracker);
        }
        drop(idle);

        let outstanding = self.pool.outstanding.fetch_sub(1, Ordering::Relaxed) - 1;
        trace!("Velocity tracker recycled ({} outstanding)", outstanding);
    }
}
