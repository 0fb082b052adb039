use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use wps_api::{build_router, AppState};
use wps_shared::config::AppConfig;

const WIZARD_SWEEP_INTERVAL_SECS: u64 = 60;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env, config/default.toml, config/{APP_ENV}.toml, environment)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry; the guard flushes the file writer on exit
    let _guard = wps_shared::telemetry::init_telemetry(&config.logging)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    let repositories = wps_infrastructure::connect(&config.database)
        .await
        .context("Failed to initialize the data backend")?;

    let state = AppState::new(repositories, &config.dashboard);

    // Abandoned wizard sessions are swept even when no new wizard is opened
    let wizards = state.wizards.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(WIZARD_SWEEP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            wizards.sweep_expired();
        }
    });
    let app = build_router(state, &config.cors);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
