//! Bearer token authentication middleware.

use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use logopress_core::AppError;
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// State handed to the auth middleware layer.
#[derive(Clone)]
pub struct AuthState {
    pub api_token: String,
}

/// Constant-time string comparison to avoid leaking token prefixes
/// through timing.
fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Reject any request whose bearer token does not match the configured
/// secret. Missing header, malformed header, and wrong token all map to
/// the same 401 body.
pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    request: Request,
    next: Next,
) -> Response {
    match bearer_token(&request) {
        Some(token) if secure_compare(token, &auth_state.api_token) => next.run(request).await,
        _ => {
            tracing::debug!("Rejected request with missing or incorrect bearer token");
            HttpAppError(AppError::Unauthorized).into_response()
        }
    }
}
