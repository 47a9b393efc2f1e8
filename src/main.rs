use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use diamond_estimator::{build_router, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diamond_estimator=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let addr = config.socket_addr();
    info!(
        base_price_per_carat = %config.base_price_per_carat,
        max_batch_size = config.max_batch_size,
        "Pricing configuration loaded"
    );

    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
