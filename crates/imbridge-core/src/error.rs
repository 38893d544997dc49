//! Error types for imbridge.

use thiserror::Error;

/// The main error type for imbridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Options failed validation.
    #[error("invalid option '{field}': {reason}")]
    InvalidOption { field: &'static str, reason: String },

    /// The host window could not be created.
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    /// The host event loop failed.
    #[error("event loop error: {0}")]
    EventLoop(String),

    /// The GUI layer failed to initialize.
    #[error("GUI initialization failed: {0}")]
    GuiInit(String),

    /// Rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for imbridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
