#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `GestureLog` unit tests.
//!
//! Only compiled during testing (`#[cfg(test)]`).

use crate::input::{MotionAction, MotionEvent};
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that point APPDATA somewhere else
static APPDATA_LOCK: Mutex<()> = Mutex::new(());

/// Create a temporary directory that is removed when dropped
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points APPDATA at a temp directory and restores the
/// previous value on drop.
///
/// The guard holds `APPDATA_LOCK` for its whole lifetime, so only one test at
/// a time observes a modified environment.
pub struct AppdataGuard {
    original: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only environment mutation, serialized through APPDATA_LOCK"
)]
impl AppdataGuard {
    /// Set APPDATA to `temp_dir` until the guard is dropped
    pub fn new(temp_dir: &TempDir) -> Self {
        let lock = APPDATA_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var("APPDATA").ok();
        // SAFETY: APPDATA_LOCK is held, so no other test reads or writes
        // APPDATA concurrently.
        unsafe {
            std::env::set_var("APPDATA", temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only environment mutation, serialized through APPDATA_LOCK"
)]
impl Drop for AppdataGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held until `_lock` drops after this body.
        unsafe {
            match self.original.take() {
                Some(original) => std::env::set_var("APPDATA", original),
                None => std::env::remove_var("APPDATA"),
            }
        }
    }
}

/// Build a drag: a down at `start`, `steps` moves of `(dx, dy)` every
/// `interval_ms`, and an up at the final position.
pub fn drag(start: (f32, f32), delta: (f32, f32), steps: u8, interval_ms: i64) -> Vec<MotionEvent> {
    let mut events = Vec::with_capacity(usize::from(steps) + 2);
    let (mut x, mut y) = start;
    let mut t = 0;
    events.push(MotionEvent::down(x, y, t));
    for _ in 0..steps {
        x += delta.0;
        y += delta.1;
        t += interval_ms;
        events.push(MotionEvent::moved(x, y, t));
    }
    events.push(MotionEvent::new(MotionAction::Up, 0, x, y, t + 1));
    events
}

#[test]
fn test_drag_shape() {
    let events = drag((0.0, 0.0), (10.0, 0.0), 3, 10);
    assert_eq!(events.len(), 5);
    assert_eq!(events[0].action, MotionAction::Down);
    assert_eq!(events[3].x, 30.0);
    assert_eq!(events.last().unwrap().action, MotionAction::Up);
}
