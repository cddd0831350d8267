//! Application state shared across handlers.

use logopress_core::Config;
use logopress_processing::BrandingAssets;
use logopress_storage::Storage;
use std::sync::Arc;

/// Shared state: configuration, preloaded branding assets, and the
/// output storage backend. Assets are read-only after startup so no
/// locking is needed.
pub struct AppState {
    pub config: Config,
    pub assets: BrandingAssets,
    pub storage: Arc<dyn Storage>,
}
