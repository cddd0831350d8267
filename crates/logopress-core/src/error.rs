//! Error types module
//!
//! All failures in the process pipeline are unified under the `AppError`
//! enum. The four validation errors carry fixed client-facing messages
//! that are part of the HTTP contract; everything else collapses to a
//! generic internal error on the wire.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("API token missing or incorrect")]
    Unauthorized,

    #[error("No file sent")]
    NoFileSent,

    #[error("width and height need to both be set, or both empty")]
    SizeOptionsIncomplete,

    #[error("width and height need to be positive integers of reasonable size")]
    SizeOptionsInvalid,

    #[error("Not a valid image file")]
    NotAnImage,

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl AppError {
    /// Get the error type name for structured log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "Unauthorized",
            AppError::NoFileSent => "NoFileSent",
            AppError::SizeOptionsIncomplete => "SizeOptionsIncomplete",
            AppError::SizeOptionsInvalid => "SizeOptionsInvalid",
            AppError::NotAnImage => "NotAnImage",
            AppError::ImageProcessing(_) => "ImageProcessing",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::Unauthorized => 401,
            AppError::NoFileSent => 400,
            AppError::SizeOptionsIncomplete => 400,
            AppError::SizeOptionsInvalid => 400,
            AppError::NotAnImage => 415,
            AppError::ImageProcessing(_) => 500,
            AppError::Storage(_) => 500,
            AppError::Internal(_) => 500,
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Validation messages are contractual; internal detail never leaks.
            AppError::Unauthorized
            | AppError::NoFileSent
            | AppError::SizeOptionsIncomplete
            | AppError::SizeOptionsInvalid
            | AppError::NotAnImage => self.to_string(),
            AppError::ImageProcessing(_) | AppError::Storage(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::Unauthorized
            | AppError::NoFileSent
            | AppError::SizeOptionsIncomplete
            | AppError::SizeOptionsInvalid
            | AppError::NotAnImage => LogLevel::Debug,
            AppError::ImageProcessing(_) | AppError::Storage(_) | AppError::Internal(_) => {
                LogLevel::Error
            }
        }
    }
}
