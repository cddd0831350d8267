use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for output files (e.g., "/var/lib/logopress/out")
    /// * `base_url` - Base URL files are served under (e.g., "http://localhost:4000/images")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create output directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Convert a file name to a filesystem path, rejecting anything that
    /// could escape the output directory. The name must be a single
    /// normal path component, so `..` and separators are refused while
    /// dotted stems like `a..b.png` pass through.
    fn filename_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.contains('\\') {
            return Err(StorageError::InvalidKey(
                "File name contains invalid characters".to_string(),
            ));
        }

        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.base_path.join(filename)),
            _ => Err(StorageError::InvalidKey(
                "File name contains invalid characters".to_string(),
            )),
        }
    }

    /// Generate public URL for a stored file
    fn generate_url(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), filename)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload(&self, filename: &str, data: Bytes) -> StorageResult<String> {
        let path = self.filename_to_path(filename)?;
        let size = data.len();
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let url = self.generate_url(filename);

        tracing::info!(
            path = %path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(url)
    }
}
