use logopress_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    logopress_api::telemetry::init_telemetry(config.is_production());

    let (_state, router) = logopress_api::setup::initialize_app(config.clone()).await?;

    logopress_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
