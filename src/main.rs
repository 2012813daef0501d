//! Inheritance vault dashboard backend.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser / vault-cli
//!            │
//!            ▼
//!     ┌──────────────┐    ┌──────────────────┐    ┌─────────────────┐
//!     │   api        │───▶│ vault controller │───▶│ wallet provider │──▶ Wallet
//!     │ (axum JSON)  │    │ session + txlog  │    │ bridge / mock   │    (signs)
//!     └──────────────┘    └──────────────────┘    └─────────────────┘
//!
//!     Cross-cutting: config (TOML + env), observability (tracing, metrics),
//!     lifecycle (startup, signals, shutdown)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use inheritance_vault::api::ApiServer;
use inheritance_vault::blockchain::types::ContractRole;
use inheritance_vault::config::loader;
use inheritance_vault::lifecycle::{startup, Shutdown};
use inheritance_vault::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "inheritance-vault")]
#[command(about = "Inheritance vault dashboard backend", long_about = None)]
struct Args {
    /// TOML config file. Environment overrides still apply.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => loader::load_from_env()?,
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "inheritance-vault starting");

    for role in ContractRole::ALL {
        match config.contracts.get(role) {
            Some(id) => tracing::info!(contract = %id, "{} contract", role),
            None => tracing::warn!("{} contract not configured", role),
        }
    }

    tracing::info!(
        bind_address = %config.server.bind_address,
        network = %config.network,
        wallet_mode = ?config.wallet.mode,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let wallet = startup::build_wallet(&config)?;
    let state = startup::build_state(&config, wallet);

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = ApiServer::new(&config.server, state);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
