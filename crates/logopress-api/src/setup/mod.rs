//! Application assembly: state construction, routes, server startup.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::Context;
use axum::Router;
use logopress_core::Config;
use logopress_processing::BrandingAssets;
use logopress_storage::LocalStorage;
use std::path::Path;
use std::sync::Arc;

/// Build application state and router from configuration.
///
/// Fails fast when the asset directory is missing the font or a logo
/// variant, or when the output directory cannot be created.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    config.validate()?;

    let assets = BrandingAssets::load(Path::new(&config.assets_dir))
        .context("failed to load branding assets")?;

    let storage = LocalStorage::new(&config.output_dir, config.public_base_url.clone())
        .await
        .context("failed to initialize output storage")?;

    let state = Arc::new(AppState {
        config: config.clone(),
        assets,
        storage: Arc::new(storage),
    });

    let router = routes::setup_routes(&config, state.clone());
    Ok((state, router))
}
