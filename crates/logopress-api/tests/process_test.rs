//! End-to-end tests for the image branding endpoint.

mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use helpers::fixtures::{jpeg_bytes, png_bytes};
use helpers::{setup_test_app, TestApp, TEST_API_TOKEN, TEST_BASE_URL};
use image::{GenericImageView, ImageFormat};
use serde_json::Value;

const PROCESS_PATH: &str = "/api/v0/process";

fn image_part(bytes: Vec<u8>, file_name: &str, mime: &str) -> Part {
    Part::bytes(bytes).file_name(file_name).mime_type(mime)
}

fn default_form() -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        image_part(png_bytes(200, 150), "photo.png", "image/png"),
    )
}

async fn post_authed(app: &TestApp, form: MultipartForm) -> axum_test::TestResponse {
    app.server
        .post(PROCESS_PATH)
        .authorization_bearer(TEST_API_TOKEN)
        .multipart(form)
        .await
}

fn error_message(response: &axum_test::TestResponse) -> String {
    response.json::<Value>()["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = setup_test_app().await;
    let response = app.server.post(PROCESS_PATH).multipart(default_form()).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&response), "API token missing or incorrect");
}

#[tokio::test]
async fn test_wrong_token_rejected() {
    let app = setup_test_app().await;
    let response = app
        .server
        .post(PROCESS_PATH)
        .authorization_bearer("not-the-token")
        .multipart(default_form())
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&response), "API token missing or incorrect");
}

#[tokio::test]
async fn test_auth_checked_before_other_validation() {
    // A request that would also fail the presence check still gets 401.
    let app = setup_test_app().await;
    let response = app
        .server
        .post(PROCESS_PATH)
        .multipart(MultipartForm::new().add_text("width", "100"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_file_rejected() {
    let app = setup_test_app().await;
    let form = MultipartForm::new()
        .add_text("width", "100")
        .add_text("height", "100");
    let response = post_authed(&app, form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&response), "No file sent");
}

#[tokio::test]
async fn test_non_image_payload_rejected() {
    let app = setup_test_app().await;
    let form = MultipartForm::new().add_part(
        "image",
        image_part(b"just some text".to_vec(), "notes.txt", "text/plain"),
    );
    let response = post_authed(&app, form).await;

    assert_eq!(response.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(error_message(&response), "Not a valid image file");
}

#[tokio::test]
async fn test_non_image_reported_before_size_options() {
    // Content sniffing runs before size validation, so a bad payload with
    // bad size options still reports 415.
    let app = setup_test_app().await;
    let form = MultipartForm::new()
        .add_part(
            "image",
            image_part(b"<html></html>".to_vec(), "page.html", "text/html"),
        )
        .add_text("width", "100");
    let response = post_authed(&app, form).await;

    assert_eq!(response.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_spoofed_content_type_rejected() {
    // The declared MIME type is ignored; only the bytes matter.
    let app = setup_test_app().await;
    let form = MultipartForm::new().add_part(
        "image",
        image_part(b"not actually a png".to_vec(), "fake.png", "image/png"),
    );
    let response = post_authed(&app, form).await;

    assert_eq!(response.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_width_without_height_rejected() {
    let app = setup_test_app().await;
    let form = default_form().add_text("width", "100");
    let response = post_authed(&app, form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&response),
        "width and height need to both be set, or both empty"
    );
}

#[tokio::test]
async fn test_out_of_range_dimensions_rejected() {
    let app = setup_test_app().await;
    for value in ["0", "16385", "abc", "-5", "12.5"] {
        let form = default_form()
            .add_text("width", value)
            .add_text("height", "100");
        let response = post_authed(&app, form).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{value}");
        assert_eq!(
            error_message(&response),
            "width and height need to be positive integers of reasonable size",
            "{value}"
        );
    }
}

#[tokio::test]
async fn test_invalid_enum_options_fall_back_silently() {
    let app = setup_test_app().await;
    let form = default_form()
        .add_text("textcolor", "blue")
        .add_text("textsize", "gigantic")
        .add_text("logocolor", "purple")
        .add_text("logoposition", "top-lfet")
        .add_text("darken", "TRUE")
        .add_text("text", "Hello");
    let response = post_authed(&app, form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_process_with_defaults() {
    let app = setup_test_app().await;
    let response = post_authed(&app, default_form()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let url = response.json::<Value>()["url"].as_str().unwrap().to_string();
    assert_eq!(url, format!("{TEST_BASE_URL}/photo-logo.png"));

    let stored = image::open(app.output_path("photo-logo.png")).unwrap();
    assert_eq!(stored.dimensions(), (200, 150));
}

#[tokio::test]
async fn test_full_pipeline_end_to_end() {
    let app = setup_test_app().await;
    let form = MultipartForm::new()
        .add_part(
            "image",
            image_part(jpeg_bytes(200, 200), "banner.jpg", "image/jpeg"),
        )
        .add_text("width", "100")
        .add_text("height", "100")
        .add_text("darken", "true")
        .add_text("text", "HI")
        .add_text("textcolor", "white")
        .add_text("logocolor", "white")
        .add_text("logoposition", "top-left");
    let response = post_authed(&app, form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let url = response.json::<Value>()["url"].as_str().unwrap().to_string();
    assert_eq!(url, format!("{TEST_BASE_URL}/banner-logo.jpg"));

    let path = app.output_path("banner-logo.jpg");
    let stored = image::open(&path).unwrap();
    assert_eq!(stored.dimensions(), (100, 100));
    assert_eq!(
        image::guess_format(&std::fs::read(&path).unwrap()).unwrap(),
        ImageFormat::Jpeg
    );

    // The gray background was darkened to roughly half brightness. The
    // top-right area is free of both logo and centered text.
    let background = stored.get_pixel(95, 5);
    assert!(background[0] < 100, "background not darkened: {background:?}");

    // The white logo is 50px wide in the top-left corner; its center is
    // an opaque part of the artwork.
    let logo_center = stored.get_pixel(25, 10);
    assert!(logo_center[0] > 160, "logo not visible: {logo_center:?}");
}

#[tokio::test]
async fn test_repeated_upload_overwrites_output() {
    let app = setup_test_app().await;

    let first = post_authed(&app, default_form()).await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let form = MultipartForm::new()
        .add_part(
            "image",
            image_part(png_bytes(80, 60), "photo.png", "image/png"),
        );
    let second = post_authed(&app, form).await;
    assert_eq!(second.status_code(), StatusCode::OK);

    let stored = image::open(app.output_path("photo-logo.png")).unwrap();
    assert_eq!(stored.dimensions(), (80, 60));
}

#[tokio::test]
async fn test_upload_without_extension_keeps_trailing_dot() {
    let app = setup_test_app().await;
    let form = MultipartForm::new().add_part(
        "image",
        image_part(png_bytes(50, 50), "snapshot", "application/octet-stream"),
    );
    let response = post_authed(&app, form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let url = response.json::<Value>()["url"].as_str().unwrap().to_string();
    assert_eq!(url, format!("{TEST_BASE_URL}/snapshot-logo."));
    assert!(app.output_path("snapshot-logo.").exists());
}

#[tokio::test]
async fn test_dotted_filename_stored_successfully() {
    let app = setup_test_app().await;
    let form = MultipartForm::new().add_part(
        "image",
        image_part(png_bytes(50, 50), "sale..final.png", "image/png"),
    );
    let response = post_authed(&app, form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let url = response.json::<Value>()["url"].as_str().unwrap().to_string();
    assert_eq!(url, format!("{TEST_BASE_URL}/sale..final-logo.png"));
    assert!(app.output_path("sale..final-logo.png").exists());
}

#[tokio::test]
async fn test_health_does_not_require_auth() {
    let app = setup_test_app().await;
    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_openapi_spec_served() {
    let app = setup_test_app().await;
    let response = app.server.get("/api/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let spec = response.json::<Value>();
    assert!(spec["paths"]["/api/v0/process"].is_object());
}
