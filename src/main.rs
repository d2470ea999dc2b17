//! SortBench - Application Entry Point
//!
//! This is the main entry point for the SortBench server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sortbench::{
    benchmark::JobMetrics,
    config::{CONFIG, LogFormat},
    create_router,
    services::{LogPublisher, RedisPublisher, SummaryPublisher},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match CONFIG.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting SortBench server...");

    let metrics = JobMetrics::new()?;

    // Connect the summary queue, or fall back to logging summaries
    let publisher: Arc<dyn SummaryPublisher> = match &CONFIG.queue.url {
        Some(url) => {
            tracing::info!("Connecting to summary queue '{}'...", CONFIG.queue.name);
            Arc::new(RedisPublisher::connect(url, CONFIG.queue.name.clone()).await?)
        }
        None => {
            tracing::warn!("SUMMARY_QUEUE_URL not set, job summaries will only be logged");
            Arc::new(LogPublisher)
        }
    };

    // Create application state
    let state = AppState::new(metrics, publisher, CONFIG.clone());

    // Build the router
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("SortBench shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight jobs...");
}
