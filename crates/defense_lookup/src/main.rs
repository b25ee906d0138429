use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use defense_lookup::config::AppConfig;
use defense_lookup::dataset::{CsvFile, DataStore};
use defense_lookup::lookup::LookupService;
use defense_lookup::server::{create_router, AppState};

const DEFAULT_CONFIG_PATH: &str = "defense_lookup.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = AppConfig::load_from_file(&config_path).map_err(|e| {
        anyhow::anyhow!("Failed to load config from {}: {}", config_path.display(), e)
    })?;

    info!("Loading dataset from {}", config.dataset.path.display());
    let store = DataStore::open(&CsvFile::new(&config.dataset.path), &config.dataset.columns);
    match store.table() {
        Ok(table) => {
            info!("Loaded {} defense records", table.len());
            for dup in table.duplicates() {
                warn!(
                    "Identity number {} appears on lines {:?}; lookups use the first row",
                    dup.identity, dup.lines
                );
            }
        }
        Err(e) => error!("Error loading data: {}. Lookups are disabled.", e),
    }

    let state = Arc::new(AppState::new(LookupService::new(store)));
    let app = create_router(state);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
