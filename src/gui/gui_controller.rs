//! GUI controller
//!
//! Owns the Slint `MainWindow`, turns its pointer callbacks into
//! `MotionEvent`s for the `Screen` and re-renders the log after every event.

use crate::MainWindow;
use gesturelog::config::{AppConfig, ConfigManager};
use gesturelog::controller::{LogSnapshot, Screen};
use gesturelog::error::{GestureLogError, Result};
use gesturelog::input::{MotionAction, MotionEvent, PointerId};
use parking_lot::Mutex;
use slint::{Color, ComponentHandle, LogicalSize, SharedString, Weak};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// The window reports a single pointer
const POINTER_ID: PointerId = 0;

/// Connects the Slint window to the screen components
pub struct GuiController {
    window: MainWindow,
    screen: Arc<Mutex<Screen>>,
    config: AppConfig,
}

impl GuiController {
    /// Create the window and bind the touch area and the clear button
    pub fn new(screen: Screen, config: &AppConfig) -> Result<Self> {
        let window = MainWindow::new().map_err(|e| GestureLogError::GuiError(Box::new(e)))?;

        window.set_highlight_color(Color::from_argb_encoded(config.display.highlight_argb));
        window.set_text_color(Color::from_argb_encoded(config.display.text_argb));

        #[expect(
            clippy::cast_precision_loss,
            reason = "Window dimensions are far below f32's exact integer range"
        )]
        let size = LogicalSize::new(
            config.window_state.width as f32,
            config.window_state.height as f32,
        );
        window.window().set_size(size);

        let screen = Arc::new(Mutex::new(screen));
        let clock = Instant::now();

        window.on_touch_down(touch_handler(
            window.as_weak(),
            Arc::clone(&screen),
            clock,
            MotionAction::Down,
        ));
        window.on_touch_move(touch_handler(
            window.as_weak(),
            Arc::clone(&screen),
            clock,
            MotionAction::Move,
        ));
        window.on_touch_up(touch_handler(
            window.as_weak(),
            Arc::clone(&screen),
            clock,
            MotionAction::Up,
        ));
        window.on_touch_cancel(touch_handler(
            window.as_weak(),
            Arc::clone(&screen),
            clock,
            MotionAction::Cancel,
        ));

        {
            let window_handle = window.as_weak();
            let screen = Arc::clone(&screen);
            window.on_clear_clicked(move || {
                let snapshot = {
                    let screen = screen.lock();
                    screen.on_clear_clicked();
                    screen.snapshot()
                };
                if let Some(window) = window_handle.upgrade() {
                    render(&window, &snapshot);
                }
            });
        }

        info!("GUI controller created");
        Ok(Self {
            window,
            screen,
            config: config.clone(),
        })
    }

    /// Show the window and run the event loop until it is closed
    ///
    /// The final window size is written back to the configuration file.
    pub fn run(mut self) -> Result<()> {
        render(&self.window, &self.screen.lock().snapshot());
        self.window
            .run()
            .map_err(|e| GestureLogError::GuiError(Box::new(e)))?;

        self.save_window_state();
        Ok(())
    }

    fn save_window_state(&mut self) {
        let window = self.window.window();
        let size = window.size().to_logical(window.scale_factor());

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Logical window dimensions are positive and well within u32"
        )]
        let (width, height) = (size.width.round() as u32, size.height.round() as u32);

        if !self.config.record_window_size(width, height) {
            return;
        }

        // If this fails the next start simply uses the previous size
        if let Err(e) = ConfigManager::save(&self.config) {
            warn!(
                "Failed to save window size {}x{}: {}. The previous size will be restored.",
                width, height, e
            );
        }
    }
}

fn touch_handler(
    window: Weak<MainWindow>,
    screen: Arc<Mutex<Screen>>,
    clock: Instant,
    action: MotionAction,
) -> impl FnMut(f32, f32) + 'static {
    move |x, y| {
        let event_time_ms = i64::try_from(clock.elapsed().as_millis()).unwrap_or(i64::MAX);
        let event = MotionEvent::new(action, POINTER_ID, x, y, event_time_ms);
        debug!("Pointer {} at ({}, {})", action, x, y);

        let snapshot = {
            let mut screen = screen.lock();
            screen.on_touch(&event);
            screen.snapshot()
        };
        if let Some(window) = window.upgrade() {
            render(&window, &snapshot);
        }
    }
}

fn render(window: &MainWindow, snapshot: &LogSnapshot) {
    window.set_latest_entry(SharedString::from(snapshot.latest.as_str()));
    window.set_older_entries(SharedString::from(snapshot.older.as_str()));
}
