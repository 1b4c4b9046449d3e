//! Two-axis velocity tracking
//!
//! Keeps a short ring buffer of samples per pointer and derives velocity with
//! the impulse strategy: the samples are treated as pushes imparting kinetic
//! energy to a unit mass, which smooths out jitter better than a plain
//! first/last difference.

use crate::input::{MotionAction, MotionEvent, PointerId};
use std::collections::HashMap;

/// Ring buffer size per pointer
const HISTORY_SIZE: usize = 20;

/// Only samples within this many milliseconds of the newest one are used
const HORIZON_MS: i64 = 100;

/// A gap longer than this between consecutive samples means the pointer stopped
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Debug, Clone, Copy)]
struct PointerSample {
    time_ms: i64,
    x: f32,
    y: f32,
}

/// Samples usable for a velocity estimate, newest first
struct SampleWindow {
    xs: [f32; HISTORY_SIZE],
    ys: [f32; HISTORY_SIZE],
    /// Sample time relative to the newest sample (always <= 0)
    times: [f32; HISTORY_SIZE],
    count: usize,
}

#[derive(Debug, Clone)]
struct PointerHistory {
    samples: [Option<PointerSample>; HISTORY_SIZE],
    index: usize,
}

impl PointerHistory {
    fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    fn push(&mut self, sample: PointerSample) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(sample);
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "Sample ages are bounded by HORIZON_MS and fit exactly in f32"
    )]
    fn window(&self) -> SampleWindow {
        let mut window = SampleWindow {
            xs: [0.0; HISTORY_SIZE],
            ys: [0.0; HISTORY_SIZE],
            times: [0.0; HISTORY_SIZE],
            count: 0,
        };

        let Some(newest) = self.samples[self.index] else {
            return window;
        };

        let mut previous = newest;
        let mut current_index = self.index;

        while let Some(sample) = self.samples[current_index] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous.time_ms - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }

            window.xs[window.count] = sample.x;
            window.ys[window.count] = sample.y;
            window.times[window.count] = -(age as f32);
            window.count += 1;
            previous = sample;

            if window.count >= HISTORY_SIZE {
                break;
            }
            current_index = if current_index == 0 {
                HISTORY_SIZE - 1
            } else {
                current_index - 1
            };
        }

        window
    }
}

/// Velocity tracker for one or more pointers
///
/// Feed it events with [`add_movement`](Self::add_movement), call
/// [`compute_current_velocity`](Self::compute_current_velocity) and read the
/// result per pointer with [`x_velocity`](Self::x_velocity) and
/// [`y_velocity`](Self::y_velocity).
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    histories: HashMap<PointerId, PointerHistory>,
    computed: HashMap<PointerId, (f32, f32)>,
}

impl VelocityTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pointer sample
    ///
    /// A `Down` starts a fresh history for its pointer. `Cancel` carries no
    /// position worth tracking and is ignored.
    pub fn add_movement(&mut self, event: &MotionEvent) {
        if event.action == MotionAction::Cancel {
            return;
        }

        let history = self
            .histories
            .entry(event.pointer_id)
            .or_insert_with(PointerHistory::new);
        if event.action == MotionAction::Down {
            *history = PointerHistory::new();
        }

        history.push(PointerSample {
            time_ms: event.event_time_ms,
            x: event.x,
            y: event.y,
        });
    }

    /// Compute velocities for all tracked pointers
    ///
    /// `units` is the time window the result is normalized to, in
    /// milliseconds: 1 yields pixels per millisecond, 1000 pixels per second.
    pub fn compute_current_velocity(&mut self, units: u32) {
        self.compute_current_velocity_with_max(units, f32::MAX);
    }

    /// Compute velocities for all tracked pointers, capping each axis to
    /// `±max_velocity`
    pub fn compute_current_velocity_with_max(&mut self, units: u32, max_velocity: f32) {
        #[expect(
            clippy::cast_precision_loss,
            reason = "Time units are small integers that convert exactly"
        )]
        let scale = units as f32;

        self.computed.clear();
        for (&pointer_id, history) in &self.histories {
            let window = history.window();
            let vx = impulse_velocity(&window.xs, &window.times, window.count) * scale;
            let vy = impulse_velocity(&window.ys, &window.times, window.count) * scale;
            self.computed.insert(
                pointer_id,
                (cap(vx, max_velocity), cap(vy, max_velocity)),
            );
        }
    }

    /// Last computed horizontal velocity for `pointer_id`, or 0 when unknown
    pub fn x_velocity(&self, pointer_id: PointerId) -> f32 {
        self.velocity(pointer_id).0
    }

    /// Last computed vertical velocity for `pointer_id`, or 0 when unknown
    pub fn y_velocity(&self, pointer_id: PointerId) -> f32 {
        self.velocity(pointer_id).1
    }

    /// Last computed `(x, y)` velocity for `pointer_id`
    pub fn velocity(&self, pointer_id: PointerId) -> (f32, f32) {
        self.computed.get(&pointer_id).copied().unwrap_or((0.0, 0.0))
    }

    /// Reset to the initial empty state
    pub fn clear(&mut self) {
        self.histories.clear();
        self.computed.clear();
    }

    /// Whether no samples have been added since creation or the last clear
    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }
}

fn cap(velocity: f32, max_velocity: f32) -> f32 {
    if velocity.is_nan() || max_velocity.is_nan() || max_velocity <= 0.0 {
        return 0.0;
    }
    velocity.clamp(-max_velocity, max_velocity)
}

/// Velocity in units per millisecond from samples ordered newest first
fn impulse_velocity(
    positions: &[f32; HISTORY_SIZE],
    times: &[f32; HISTORY_SIZE],
    count: usize,
) -> f32 {
    if count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let oldest = count - 1;
    let mut next_time = times[oldest];

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if (current_time - next_time).abs() < f32::EPSILON {
            continue;
        }

        let v_curr = (positions[i] - positions[i - 1]) / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
