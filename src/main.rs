//! Brand Site Backend server binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use brand_site::config::{Config, LogFormat};
use brand_site::storage::{self, JsonStore};
use brand_site::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Brand Site Backend");

    let data_dir = storage::resolve_data_dir(config.data_path.as_deref());
    let store = Arc::new(JsonStore::new(data_dir));
    tracing::info!("Data directory: {:?}", store.root());
    tracing::info!("Bind address: {}", config.bind_addr);

    if !store.path(storage::SITE_DATA_FILENAME).exists() {
        tracing::warn!(
            "No {} in data directory; GET /api/site-data will return 404 until it is seeded",
            storage::SITE_DATA_FILENAME
        );
    }

    // Create application state
    let state = AppState { store };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
