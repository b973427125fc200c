//! Offering registry server
//!
//! Assembles the service graph explicitly: three in-memory stores, the
//! offering coordinator on top of them, and the HTTP router. Serves with
//! graceful shutdown on ctrl-c / SIGTERM.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use offering_api::{build_router, AppState};
use offering_service::DefaultOfferingService;
use offering_store::{
    InMemoryAssetStore, InMemoryContractDefinitionStore, InMemoryPolicyDefinitionStore,
};
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration directory
    #[arg(short, long, env = "CONFIG_DIR", default_value = "config")]
    config_dir: String,

    /// Environment (development, production, etc.)
    #[arg(short, long, env = "ENVIRONMENT", default_value = "development")]
    environment: String,

    /// Server host
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut config = ServerConfig::load_or_default(&args.config_dir, &args.environment);

    // Override with command-line arguments
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.logging.level);

    // Explicit service graph: stores first, coordinator on top.
    let asset_store = Arc::new(InMemoryAssetStore::new());
    let policy_store = Arc::new(InMemoryPolicyDefinitionStore::new());
    let contract_store = Arc::new(InMemoryContractDefinitionStore::new());

    let offering_service = Arc::new(DefaultOfferingService::new(
        asset_store,
        policy_store,
        contract_store,
    ));

    let router = build_router(AppState::new(offering_service));

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    info!("offering registry listening on {bind_address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shut down");
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
