//! Error types for the cinema playback controller
//!
//! This module defines custom error types used throughout the application.
//! We use thiserror for convenient error type definitions and anyhow for
//! application-level error handling.
//!
//! The error surface is deliberately small: most playback-facing failures
//! (missing render targets, unsupported fullscreen APIs, rejected progress
//! uploads) degrade to a logged no-op rather than an error, so only setup
//! and configuration paths produce values of this type.

use thiserror::Error;

/// Main error type for the cinema controller
#[derive(Error, Debug)]
pub enum CinemaError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Media element errors
    #[error("Media error: {0}")]
    Media(String),

    /// Fullscreen host errors
    #[error("Fullscreen error: {0}")]
    Fullscreen(String),

    /// Progress persistence errors
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error for unexpected situations
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Results in the cinema controller
pub type Result<T> = std::result::Result<T, CinemaError>;

/// Extension trait for converting other errors to CinemaError
pub trait IntoCinemaError<T> {
    /// Convert this error into a CinemaError with the given context
    fn config_err(self, context: &str) -> Result<T>;
    fn persistence_err(self, context: &str) -> Result<T>;
    fn fullscreen_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoCinemaError<T> for std::result::Result<T, E> {
    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| CinemaError::Config(format!("{}: {}", context, e)))
    }

    fn persistence_err(self, context: &str) -> Result<T> {
        self.map_err(|e| CinemaError::Persistence(format!("{}: {}", context, e)))
    }

    fn fullscreen_err(self, context: &str) -> Result<T> {
        self.map_err(|e| CinemaError::Fullscreen(format!("{}: {}", context, e)))
    }
}
