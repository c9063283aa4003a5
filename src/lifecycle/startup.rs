//! Startup orchestration.
//!
//! Order: .env → configuration → logging → metrics → RPC client → listener.
//! Any error before the listener is bound is fatal.

use std::path::PathBuf;

use tokio::net::TcpListener;

use crate::config::load_config;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};

/// Start the relay and serve until a shutdown signal arrives.
pub async fn run(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let config = load_config(config_path.as_deref())?;
    logging::init_logging(&config.observability);

    tracing::info!("airdrop-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        cors_origin = ?config.cors.allowed_origin,
        devnet_url = %config.rpc.devnet_url,
        testnet_url = %config.rpc.testnet_url,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // validated at load time
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(server.config().listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Server started");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
