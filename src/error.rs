//! Error types for `GestureLog`
//!
//! Touch handling itself has no failure path; these errors cover the ambient
//! parts of the application (configuration, logging and the GUI shell).
//!
//! Error variants use `#[source]` to preserve error chains so the full cause
//! shows up in the log file.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `GestureLog`
#[derive(Debug, Error)]
pub enum GestureLogError {
    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Logging subsystem could not be initialized
    #[error("Logging error: {0}")]
    LoggingError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The window or its event loop failed
    #[error("GUI error: {0}")]
    GuiError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `GestureLog` operations
pub type Result<T> = std::result::Result<T, GestureLogError>;

/// Convert an error to a user-friendly message
///
/// The binary prints this to stderr when startup fails.
pub fn get_user_friendly_error(error: &GestureLogError) -> String {
    match error {
        GestureLogError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Default settings will be used.\n\
             Check that you have write permissions to the GestureLog directory."
            .to_string(),
        GestureLogError::LoggingError(_) => "Failed to start the logging system.\n\n\
             Check that the GestureLog directory is writable."
            .to_string(),
        GestureLogError::GuiError(e) => {
            format!(
                "The window could not be created:\n\n{e}\n\n\
                 Please ensure a graphical session is available."
            )
        }
        GestureLogError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        GestureLogError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
