//! Service entry-point: loads settings, wires the user repository and serves
//! the REST API with OpenAPI docs in debug builds.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use accounts::inbound::http::health::HealthState;
use accounts::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("failed to load settings: {e}"),
        )
    })?;
    let config = ServerConfig::from_settings(&settings).await?;
    info!(bind_addr = %config.bind_addr, "starting accounts service");

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
