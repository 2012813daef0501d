//! JSON API for the dashboard front end.
//!
//! # Data Flow
//! ```text
//! Browser / vault-cli
//!     → request id + trace + body limit (tower-http)
//!     → handlers.rs (extract, validate form)
//!     → VaultController (session, wallet dispatch, log)
//!     → error.rs (VaultError → status + JSON body)
//! ```
//!
//! # Design Decisions
//! - Read endpoints carry a request timeout; wallet actions do not, since a
//!   signing prompt waits on the user
//! - Handlers hold `Arc`s only; all mutable state lives in the controller

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::vault::controller::VaultController;
use crate::vault::model::VaultCatalog;
use self::handlers::*;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<VaultController>,
    pub catalog: Arc<VaultCatalog>,
}

/// Build the API router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
    let timeout = TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs));

    Router::new()
        .route("/health", get(health).layer(timeout.clone()))
        .route("/api/session", get(get_session).layer(timeout.clone()))
        .route("/api/transactions", get(get_transactions).layer(timeout.clone()))
        .route("/api/error", get(get_last_error).layer(timeout.clone()))
        .route("/api/dashboard", get(dashboard).layer(timeout.clone()))
        .route("/api/vaults/{id}", get(get_vault).layer(timeout.clone()))
        .route(
            "/api/vaults",
            get(list_vaults).layer(timeout).post(create_vault),
        )
        .route("/api/wallet/connect", post(connect))
        .route("/api/wallet/disconnect", post(disconnect))
        .route("/api/vaults/{id}/claim", post(claim_inheritance))
        .route("/api/vaults/{id}/activity", post(trigger_activity))
        .route("/api/vaults/{id}/death", post(trigger_death))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// HTTP server exposing the vault controller.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    pub fn new(config: &ServerConfig, state: AppState) -> Self {
        Self {
            router: build_router(config, state),
        }
    }

    /// Serve until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "API server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("API server stopped");
        Ok(())
    }
}
