//! Test helpers: build app state and router for integration tests.
//!
//! Run from workspace root: `cargo test -p logopress-api`.

pub mod fixtures;

use axum_test::TestServer;
use logopress_api::setup;
use logopress_core::Config;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_API_TOKEN: &str = "test-secret-token";
pub const TEST_BASE_URL: &str = "http://localhost:4000/images";

/// Test application: server plus the owned output directory.
pub struct TestApp {
    pub server: TestServer,
    pub output_dir: TempDir,
}

impl TestApp {
    /// Path of a stored output file.
    pub fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir.path().join(filename)
    }
}

/// Setup a test app with isolated output storage and the bundled assets.
pub async fn setup_test_app() -> TestApp {
    let output_dir = TempDir::new().unwrap();
    let assets_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets");

    let config = Config {
        server_port: 0,
        api_token: TEST_API_TOKEN.to_string(),
        assets_dir: assets_dir.to_string_lossy().into_owned(),
        output_dir: output_dir.path().to_string_lossy().into_owned(),
        public_base_url: TEST_BASE_URL.to_string(),
        max_file_size_bytes: 10 * 1024 * 1024,
        environment: "test".to_string(),
    };

    let (_state, router) = setup::initialize_app(config).await.unwrap();
    let server = TestServer::new(router).unwrap();

    TestApp { server, output_dir }
}
