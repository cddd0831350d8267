//! Logopress core library
//!
//! Shared building blocks for the logopress service: configuration,
//! the error taxonomy, and parsing/validation of the image transform
//! options carried by a process request.

pub mod config;
pub mod error;
pub mod options;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use options::{
    LogoColor, LogoPosition, OutputSize, RawOptions, TextColor, TextSize, TransformOptions,
};
