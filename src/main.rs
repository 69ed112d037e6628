//! Derma Triage server binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use derma_triage::adapters::{
    api_router, FileSessionStore, InMemorySessionStore, MockImageClassifier, ScreeningAppState,
};
use derma_triage::config::{AppConfig, StorageBackend};
use derma_triage::ports::TriageSessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let session_store: Arc<dyn TriageSessionStore> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemorySessionStore::new()),
        StorageBackend::File => Arc::new(FileSessionStore::new(&config.storage.directory)),
    };
    let image_source =
        Arc::new(MockImageClassifier::new().with_delay(config.screening.image_delay()));

    let state = ScreeningAppState::new(session_store, image_source)
        .with_copilot_delay(config.screening.copilot_delay());
    let app = api_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        storage = ?config.storage.backend,
        "Derma Triage listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter. Production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
