use punch_in_tracker::api;
use punch_in_tracker::config::AppConfig;
use punch_in_tracker::store::{DocumentStore, StorageGateway};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Configuration:
    let config = AppConfig::from_env()?;

    // 2. Storage gateway. A failed connect leaves the server running in a
    //    degraded state; data routes answer 503 until the process restarts.
    let gateway = match StorageGateway::connect(&config.store_url, &config.collection).await {
        Ok(gateway) => gateway,
        Err(err) => {
            tracing::error!("Failed to connect to document store: {}", err);
            StorageGateway::disconnected(&config.collection)
        }
    };
    let store: Arc<dyn DocumentStore> = Arc::new(gateway);

    // 3. HTTP router:
    let app = api::router(store);

    // 4. Start HTTP server:
    tracing::info!("Server listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
