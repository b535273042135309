use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use translator_relay::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "translator_relay=debug,tower_http=debug".into()),
        )
        .init();

    let (mut config, loaded_path) = Config::discover(&Config::candidate_paths());
    match loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using defaults"),
    }
    config.apply_env_overrides()?;

    let host: std::net::IpAddr = config
        .system_config
        .host
        .parse()
        .map_err(|e| anyhow::anyhow!("host must be a valid IP address: {}", e))?;
    let addr = SocketAddr::from((host, config.system_config.port));

    info!("Relaying to upstream: {}", config.upstream_config.base_url);
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Translator relay running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
