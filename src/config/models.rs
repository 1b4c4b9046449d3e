//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gesture recognition thresholds
    pub gestures: GestureSettings,
    /// Log colors
    pub display: DisplaySettings,
    /// Initial window size
    pub window_state: WindowState,
}

/// Thresholds used by the gesture classifier and the touch listener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Distance in logical pixels a contact must travel before it counts as a scroll
    pub touch_slop: f32,
    /// Release speed (px/s) above which a scroll ends in a fling
    pub min_fling_velocity: f32,
    /// Release speeds are capped to this value (px/s)
    pub max_fling_velocity: f32,
    /// Time window in milliseconds velocities are normalized to (1000 = per second)
    pub velocity_units: u32,
}

/// Colors for the log view, encoded as `0xAARRGGBB`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Color of the newest entry
    pub highlight_argb: u32,
    /// Color of every older entry
    pub text_argb: u32,
}

/// Window size, saved when the window closes and restored on the next start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8_000.0,
            velocity_units: 1000,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            highlight_argb: 0xFFFF_FFFF,
            text_argb: 0xFF9E_9E9E,
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 480,
            height: 640,
        }
    }
}

impl AppConfig {
    /// Remember the window size for the next start
    ///
    /// Returns `true` if the stored size changed. Zero sizes are ignored.
    pub fn record_window_size(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let window_state = WindowState { width, height };
        if self.window_state == window_state {
            return false;
        }
        self.window_state = window_state;
        true
    }

    /// Replace out-of-range values with their defaults
    ///
    /// Returns `true` if anything was changed.
    pub fn sanitize(&mut self) -> bool {
        let defaults = GestureSettings::default();
        let gestures = &mut self.gestures;
        let mut changed = false;

        if !gestures.touch_slop.is_finite() || gestures.touch_slop < 0.0 {
            warn!("Invalid touch_slop {}, using {}", gestures.touch_slop, defaults.touch_slop);
            gestures.touch_slop = defaults.touch_slop;
            changed = true;
        }
        if !gestures.max_fling_velocity.is_finite() || gestures.max_fling_velocity <= 0.0 {
            warn!(
                "Invalid max_fling_velocity {}, using {}",
                gestures.max_fling_velocity, defaults.max_fling_velocity
            );
            gestures.max_fling_velocity = defaults.max_fling_velocity;
            changed = true;
        }
        if !gestures.min_fling_velocity.is_finite()
            || gestures.min_fling_velocity < 0.0
            || gestures.min_fling_velocity > gestures.max_fling_velocity
        {
            warn!(
                "Invalid min_fling_velocity {}, using {}",
                gestures.min_fling_velocity, defaults.min_fling_velocity
            );
            gestures.min_fling_velocity =
                defaults.min_fling_velocity.min(gestures.max_fling_velocity);
            changed = true;
        }
        if gestures.velocity_units == 0 {
            warn!("velocity_units must be positive, using {}", defaults.velocity_units);
            gestures.velocity_units = defaults.velocity_units;
            changed = true;
        }
        if self.window_state.width == 0 || self.window_state.height == 0 {
            warn!("Invalid window size, using defaults");
            self.window_state = WindowState::default();
            changed = true;
        }

        changed
    }
}
