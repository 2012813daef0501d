use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::blockchain::types::Network;
use crate::vault::display::{format_address, format_stx, time_remaining, HealthTier, TimeRemaining};
use crate::vault::form::VaultDraft;
use crate::vault::model::{DashboardSummary, Vault};
use crate::vault::types::{now_millis, TransactionRecord};

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Empty when no wallet is connected.
    pub address: String,
    pub connected: bool,
    pub pending_calls: usize,
    pub network: Network,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TxAccepted {
    pub tx_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastError {
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultView {
    #[serde(flatten)]
    pub vault: Vault,
    pub formatted_amount: String,
    pub formatted_owner: String,
    pub health: Option<HealthTier>,
    pub time_remaining: TimeRemaining,
}

impl VaultView {
    fn new(vault: Vault, now_ms: u64) -> Self {
        Self {
            formatted_amount: format_stx(vault.total_amount),
            formatted_owner: format_address(&vault.owner),
            health: vault.confidence_score.map(HealthTier::from_score),
            time_remaining: time_remaining(
                vault.creation_time,
                vault.unlock_conditions.time_delay,
                now_ms,
            ),
            vault,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub formatted_total_value: String,
}

fn session_view(state: &AppState) -> SessionView {
    let controller = &state.controller;
    SessionView {
        address: controller.address(),
        connected: controller.is_connected(),
        pending_calls: controller.pending_calls(),
        network: controller.network(),
    }
}

pub async fn health() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(session_view(&state))
}

pub async fn connect(State(state): State<AppState>) -> Result<Json<SessionView>, ApiError> {
    state.controller.connect_wallet().await?;
    Ok(Json(session_view(&state)))
}

pub async fn disconnect(State(state): State<AppState>) -> Json<SessionView> {
    state.controller.disconnect_wallet().await;
    Json(session_view(&state))
}

pub async fn get_transactions(State(state): State<AppState>) -> Json<Vec<TransactionRecord>> {
    Json(state.controller.transactions())
}

pub async fn get_last_error(State(state): State<AppState>) -> Json<LastError> {
    Json(LastError {
        error: state.controller.last_error(),
    })
}

pub async fn create_vault(
    State(state): State<AppState>,
    Json(draft): Json<VaultDraft>,
) -> Result<Json<TxAccepted>, ApiError> {
    let params = draft.validate().map_err(ApiError::InvalidForm)?;
    let tx_id = state.controller.create_vault(params).await?;
    Ok(Json(TxAccepted { tx_id }))
}

pub async fn claim_inheritance(
    State(state): State<AppState>,
    Path(vault_id): Path<u64>,
) -> Result<Json<TxAccepted>, ApiError> {
    let tx_id = state.controller.claim_inheritance(vault_id).await?;
    Ok(Json(TxAccepted { tx_id }))
}

pub async fn trigger_activity(
    State(state): State<AppState>,
    Path(vault_id): Path<u64>,
) -> Result<Json<TxAccepted>, ApiError> {
    let tx_id = state.controller.trigger_activity(vault_id).await?;
    Ok(Json(TxAccepted { tx_id }))
}

pub async fn trigger_death(
    State(state): State<AppState>,
    Path(vault_id): Path<u64>,
) -> Result<Json<TxAccepted>, ApiError> {
    let tx_id = state.controller.trigger_death(vault_id).await?;
    Ok(Json(TxAccepted { tx_id }))
}

pub async fn list_vaults(State(state): State<AppState>) -> Json<Vec<VaultView>> {
    let now = now_millis();
    Json(
        state
            .catalog
            .list()
            .into_iter()
            .map(|v| VaultView::new(v, now))
            .collect(),
    )
}

pub async fn get_vault(
    State(state): State<AppState>,
    Path(vault_id): Path<u64>,
) -> Result<Json<VaultView>, ApiError> {
    state
        .catalog
        .get(vault_id)
        .map(|v| Json(VaultView::new(v, now_millis())))
        .ok_or_else(|| ApiError::NotFound(format!("vault {}", vault_id)))
}

pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let summary = DashboardSummary::from_vaults(&state.catalog.list());
    Json(DashboardView {
        formatted_total_value: format_stx(summary.total_value),
        summary,
    })
}
