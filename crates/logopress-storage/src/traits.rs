//! Storage abstraction trait
//!
//! Defines the Storage trait that output backends must implement.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Backends persist a finished image under a caller-chosen file name and
/// return the publicly accessible URL it can be fetched from.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist `data` under `filename` and return its public URL.
    ///
    /// An existing file with the same name is overwritten.
    async fn upload(&self, filename: &str, data: Bytes) -> StorageResult<String>;
}
