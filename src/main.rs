//! HTTP server for the payroll engine.
//!
//! Environment:
//! - `FOLHA_CONFIG_DIR`: configuration directory (default `./config/folha`)
//! - `FOLHA_BIND_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `FOLHA_SNAPSHOT_PATH`: snapshot file (default `./data/snapshots.json`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::net::SocketAddr;

use folha_engine::api::{AppState, create_router};
use folha_engine::config::ConfigLoader;
use folha_engine::snapshot::JsonFileStore;
use tracing::info;

const DEFAULT_CONFIG_DIR: &str = "./config/folha";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_SNAPSHOT_PATH: &str = "./data/snapshots.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("FOLHA_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        name = %config.metadata().name,
        fiscal_year = config.metadata().fiscal_year,
        "Configuration loaded"
    );

    let snapshot_path =
        env::var("FOLHA_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.into());
    info!("Using snapshot file at: {}", snapshot_path);
    let store = JsonFileStore::new(&snapshot_path);

    let app = create_router(AppState::new(config, store));

    let addr: SocketAddr = env::var("FOLHA_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
