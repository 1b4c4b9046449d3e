//! `GestureLog` - Touch gesture and fling velocity logger
//!
//! Opens a window whose log area reports every touch event, scroll step and
//! fling, newest entry first.

#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
// Slint-generated code from include_modules! uses .unwrap() extensively
#![allow(clippy::unwrap_used)]

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gesturelog::{config::ConfigManager, controller::Screen, error::GestureLogError, utils};
use gui::GuiController;
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Initializes logging, loads configuration, builds the screen components and
/// runs the GUI event loop.
fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("GestureLog v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load().context("Failed to load application configuration")?;
    info!(
        "Configuration loaded (touch slop {}, min fling velocity {})",
        config.gestures.touch_slop, config.gestures.min_fling_velocity
    );

    info!("Creating screen components");
    let screen = Screen::create(&config);

    info!("Creating GUI controller");
    let gui_controller = match GuiController::new(screen, &config)
        .context("Failed to create GUI controller")
    {
        Ok(controller) => controller,
        Err(e) => {
            error!("Failed to initialize GUI: {:#}", e);
            show_error_and_exit(&startup_error_message(&e));
            return Err(e);
        }
    };

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("GestureLog shutting down");

    Ok(())
}

/// Builds the message shown when startup fails
fn startup_error_message(e: &anyhow::Error) -> String {
    use gesturelog::error::get_user_friendly_error;

    let details = if let Some(gesture_log_error) = e.downcast_ref::<GestureLogError>() {
        get_user_friendly_error(gesture_log_error)
    } else {
        format!("{e:#}")
    };
    format!("Failed to start GestureLog:\n\n{details}")
}

/// Prints an error message and exits the application.
fn show_error_and_exit(message: &str) {
    eprintln!("ERROR: {message}");
    std::process::exit(1);
}
