//! Configuration module
//!
//! Environment-driven configuration, read once at process start. The shared
//! API token is an injected configuration value, never a hardcoded literal.

use std::env;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 10;
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Pre-shared bearer token every request must carry.
    pub api_token: String,
    /// Directory holding the two logo variants and the font file.
    pub assets_dir: String,
    /// Directory the output images are written to.
    pub output_dir: String,
    /// Public base URL the output directory is served from.
    pub public_base_url: String,
    pub max_file_size_bytes: usize,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            api_token: env::var("API_TOKEN")
                .map_err(|_| anyhow::anyhow!("API_TOKEN must be set for authentication"))?,
            assets_dir: env::var("ASSETS_DIR").unwrap_or_else(|_| DEFAULT_ASSETS_DIR.to_string()),
            output_dir: env::var("OUTPUT_DIR")
                .map_err(|_| anyhow::anyhow!("OUTPUT_DIR must be set"))?,
            public_base_url: env::var("PUBLIC_BASE_URL")
                .map_err(|_| anyhow::anyhow!("PUBLIC_BASE_URL must be set"))?,
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            environment,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.api_token.trim().is_empty() {
            return Err(anyhow::anyhow!("API_TOKEN must not be empty"));
        }
        if self.public_base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("PUBLIC_BASE_URL must not be empty"));
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}
