//! prompt-gateway service binary.
//!
//! # Architecture Overview
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 PROMPT GATEWAY                │
//!                      │                                               │
//!   POST /api/generate │  ┌────────┐   ┌──────────┐   ┌────────────┐  │
//!   ───────────────────┼─▶│  http  │──▶│ validate │──▶│ candidates │  │
//!                      │  │ server │   │          │   │  resolver  │  │
//!                      │  └────────┘   └──────────┘   └─────┬──────┘  │
//!                      │                                     │         │
//!                      │                                     ▼         │
//!   JSON envelope      │  ┌──────────┐   ┌───────────────────────┐    │    Upstream
//!   ◀──────────────────┼──│ envelope │◀──│ forwarder (sequential │◀───┼─── generation
//!                      │  └──────────┘   │  fallback + classify) │    │    service(s)
//!                      │                 └───────────────────────┘    │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::Path;

use tokio::net::TcpListener;

use prompt_gateway::config::loader::{apply_env_overrides, load_config};
use prompt_gateway::observability::logging::init_tracing;
use prompt_gateway::{GatewayConfig, HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match std::env::var("GATEWAY_CONFIG") {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => GatewayConfig::default(),
    };
    apply_env_overrides(&mut config);

    init_tracing(&config.observability.log_filter);
    tracing::info!("prompt-gateway v0.1.0 starting");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    let server = HttpServer::new(config)?;
    tracing::info!(
        address = %local_addr,
        request_timeout_secs = server.config().timeouts.request_secs,
        upstream_timeout_secs = server.config().timeouts.upstream_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    server.run(listener, signal).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
