//! Error types for carousel operations
//!
//! Construction and navigation errors are programmer errors in the host
//! view; they are reported synchronously and never retried.

use thiserror::Error;

/// Errors raised by the carousel controller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    /// Bad construction arguments or settings
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Explicit navigation to a slide that does not exist
    #[error("Index {index} out of range (slide count {slide_count})")]
    IndexOutOfRange { index: usize, slide_count: usize },
}

/// Result type alias for controller operations
pub type CarouselResult<T> = Result<T, CarouselError>;

impl CarouselError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CarouselError::InvalidConfiguration(message.into())
    }
}

/// Errors that can occur while loading carousel settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings parsed but failed validation
    #[error(transparent)]
    Invalid(#[from] CarouselError),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors raised by the event countdown
#[derive(Error, Debug)]
pub enum CountdownError {
    /// Event date could not be parsed
    #[error("Invalid event date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}
