//! waypost server binary.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────────┐
//!                     │                    WAYPOST                        │
//!                     │                                                   │
//!   Client Request    │  ┌─────────┐    ┌──────────────┐    ┌─────────┐  │
//!   ──────────────────┼─▶│  http   │───▶│   dispatch   │───▶│ routing │  │
//!                     │  │ adapter │    │  lifecycle   │    │  table  │  │
//!                     │  └─────────┘    └──────┬───────┘    └─────────┘  │
//!                     │                        │                          │
//!                     │                        ▼                          │
//!                     │                 ┌──────────────┐                  │
//!                     │                 │   handler    │                  │
//!                     │                 │  (app code)  │                  │
//!                     │                 └──────┬───────┘                  │
//!                     │                        │                          │
//!   Client Response   │  ┌─────────┐    ┌──────▼───────┐                  │
//!   ◀─────────────────┼──│ outcome │◀───│ envelope /   │                  │
//!                     │  │ writer  │    │ domain error │                  │
//!                     │  └─────────┘    └──────────────┘                  │
//!                     │                                                   │
//!                     │  ┌─────────────────────────────────────────────┐  │
//!                     │  │           Cross-Cutting Concerns            │  │
//!                     │  │  ┌────────┐ ┌─────────────┐ ┌────────────┐  │  │
//!                     │  │  │ config │ │ persistence │ │ observa-   │  │  │
//!                     │  │  │        │ │   scoping   │ │ bility     │  │  │
//!                     │  │  └────────┘ └─────────────┘ └────────────┘  │  │
//!                     │  └─────────────────────────────────────────────┘  │
//!                     └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use waypost::config::{load_config, ServerConfig};
use waypost::dispatch::{Dispatcher, ResponseEnvelope};
use waypost::http::HttpServer;
use waypost::observability;
use waypost::routing::RouteTable;

#[derive(Parser)]
#[command(name = "waypost")]
#[command(about = "Embedded JSON route-dispatch server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => ServerConfig::default(),
    };

    observability::logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    let mut table = RouteTable::new();
    table.get("/ping", |_params| Ok(ResponseEnvelope::with_payload("pong")))?;
    let dispatcher = Arc::new(Dispatcher::new(table));

    tracing::info!(routes = dispatcher.table().len(), "Routes registered");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config, dispatcher);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
