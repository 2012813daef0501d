//! Mapping of workflow errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::vault::error::VaultError;

/// Error returned by API handlers.
#[derive(Debug)]
pub enum ApiError {
    Vault(VaultError),
    InvalidForm(Vec<String>),
    NotFound(String),
}

impl From<VaultError> for ApiError {
    fn from(err: VaultError) -> Self {
        ApiError::Vault(err)
    }
}

/// HTTP status for a workflow error.
pub fn status_for(err: &VaultError) -> StatusCode {
    match err {
        VaultError::NotConnected => StatusCode::UNAUTHORIZED,
        VaultError::ContractNotConfigured(_) | VaultError::MalformedContractId(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        VaultError::WalletRejected(_) | VaultError::EmptyTxId | VaultError::ConnectionFailed(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Vault(err) => {
                if err.is_precondition() {
                    tracing::debug!(kind = err.kind(), error = %err, "Request refused before wallet dispatch");
                } else {
                    tracing::warn!(kind = err.kind(), error = %err, "Wallet action failed");
                }
                let body = json!({"error": err.kind(), "message": err.to_string()});
                (status_for(&err), Json(body)).into_response()
            }
            ApiError::InvalidForm(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"error": "invalid_form", "messages": messages})),
            )
                .into_response(),
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "not_found", "message": what})),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::types::ContractRole;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&VaultError::NotConnected), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_for(&VaultError::ContractNotConfigured(ContractRole::OracleIntegration)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_for(&VaultError::EmptyTxId), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_form_error_status() {
        let resp = ApiError::InvalidForm(vec!["Bitcoin address is required".into()]).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
