use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use logopress_core::{AppError, RawOptions};
use logopress_processing::ImagePipeline;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::naming::output_filename;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessResponse {
    /// Public URL of the branded output image
    pub url: String,
}

/// The uploaded file plus all raw option fields from the form.
struct ProcessRequest {
    original_name: String,
    data: Bytes,
    options: RawOptions,
}

async fn read_multipart(mut multipart: Multipart) -> Result<ProcessRequest, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut options = RawOptions::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Internal(format!("multipart read failed: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let original_name = field.file_name().unwrap_or("image").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Internal(format!("failed to read upload: {e}")))?;
                file = Some((original_name, data));
            }
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Internal(format!("failed to read field: {e}")))?;
                match name.as_str() {
                    "width" => options.width = Some(value),
                    "height" => options.height = Some(value),
                    "darken" => options.darken = Some(value),
                    "text" => options.text = Some(value),
                    "textcolor" => options.text_color = Some(value),
                    "textsize" => options.text_size = Some(value),
                    "logocolor" => options.logo_color = Some(value),
                    "logoposition" => options.logo_position = Some(value),
                    // Unknown fields are ignored, matching the permissive
                    // handling of unknown option values.
                    _ => {}
                }
            }
        }
    }

    let (original_name, data) = file.ok_or(AppError::NoFileSent)?;
    Ok(ProcessRequest {
        original_name,
        data,
        options,
    })
}

/// Process an uploaded image
///
/// Accepts one `image` file plus formatting options, applies the branding
/// pipeline (resize, darken, text overlay, logo composite) and persists the
/// result under `<stem>-logo.<ext>`.
#[utoipa::path(
    post,
    path = "/api/v0/process",
    tag = "images",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image processed and stored", body = ProcessResponse),
        (status = 400, description = "Missing file or malformed size options", body = ErrorResponse),
        (status = 401, description = "API token missing or incorrect", body = ErrorResponse),
        (status = 415, description = "Upload is not a recognized image", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_token" = []))
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "process_image"))]
pub async fn process_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ProcessResponse>, HttpAppError> {
    let request = read_multipart(multipart).await?;

    tracing::debug!(
        original_name = %request.original_name,
        size_bytes = request.data.len(),
        "Processing upload"
    );

    // Image decode/transform/encode is CPU-bound; keep it off the runtime.
    let worker_state = state.clone();
    let ProcessRequest {
        original_name,
        data,
        options,
    } = request;
    let branded = tokio::task::spawn_blocking(move || {
        ImagePipeline::run(&data, options, &worker_state.assets)
    })
    .await
    .map_err(|e| AppError::Internal(format!("pipeline task failed: {e}")))??;

    let filename = output_filename(&original_name);
    let url = state
        .storage
        .upload(&filename, branded.data)
        .await
        .map_err(HttpAppError::from)?;

    tracing::info!(filename = %filename, url = %url, "Image processed");

    Ok(Json(ProcessResponse { url }))
}
