use clap::Parser;
use instance_relay::{Config, RelayState, create_router};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let addr = config.socket_addr()?;

    let app = create_router(RelayState::shared());

    let listener = TcpListener::bind(&addr).await?;
    info!("Relay server running on port {}", addr.port());
    info!("Listening on http://{}", addr);
    info!("Accepting UUIDs (36 chars) and long hex IDs (64+ chars)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap_or_else(|e| error!("Server error: {}", e));

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
