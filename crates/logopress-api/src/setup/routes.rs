//! Route configuration and setup.

use crate::api_doc;
use crate::auth::{auth_middleware, AuthState};
use crate::handlers::process::process_image;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use logopress_core::Config;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let auth_state = Arc::new(AuthState {
        api_token: config.api_token.clone(),
    });

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api/openapi.json", get(openapi_spec));

    let protected_routes = Router::new()
        .route("/api/v0/process", post(process_image))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    public_routes
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        // The axum default limit is replaced with the configured one.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_file_size_bytes))
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "alive" }))
}

async fn openapi_spec() -> impl IntoResponse {
    Json(api_doc::get_openapi_spec())
}
