//! Logopress API Library
//!
//! HTTP handlers, middleware, and application setup for the image
//! branding service.

pub mod api_doc;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod naming;
pub mod setup;
pub mod state;
pub mod telemetry;

pub use error::ErrorResponse;
pub use state::AppState;
