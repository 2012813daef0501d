//! Wallet provider capability.
//!
//! The workflow never talks to a wallet directly; it is handed an
//! `Arc<dyn WalletProvider>` at construction. Production uses the JSON-RPC
//! bridge in `bridge.rs`, tests and demo mode use `mock.rs`.
//!
//! # Security
//! - Signing happens inside the wallet; no key material crosses this trait
//! - Payloads are logged by shape (argument count), never by value

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blockchain::clarity::ClarityValue;
use crate::blockchain::types::Network;

/// Wallet method used for every contract call.
pub const CALL_CONTRACT_METHOD: &str = "stx_callContract";

/// Errors raised by a wallet provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// The user declined, or the wallet refused the request.
    #[error("{0}")]
    Rejected(String),

    /// The wallet could not be reached or answered with garbage.
    #[error("Wallet transport error: {0}")]
    Transport(String),
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Payload of a `stx_callContract` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallContractParams {
    /// `<address>.<name>` of the target contract.
    pub contract: String,
    pub function_name: String,
    pub function_args: Vec<ClarityValue>,
    pub network: Network,
}

/// Wallet answer to a contract call. `txid` may legitimately be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContractResponse {
    #[serde(default)]
    pub txid: Option<String>,
}

impl CallContractResponse {
    pub fn with_txid(txid: impl Into<String>) -> Self {
        Self {
            txid: Some(txid.into()),
        }
    }
}

/// Capability exposed by a browser-style wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Whether the wallet currently considers itself connected.
    fn is_connected(&self) -> bool;

    /// Ask the user to connect. Resolves once they approve or reject.
    async fn connect(&self) -> WalletResult<()>;

    /// Tear down the wallet session.
    async fn disconnect(&self) -> WalletResult<()>;

    /// The connected STX address, if any.
    fn address(&self) -> Option<String>;

    /// Send a signing request. Resolves when the wallet answers.
    async fn request(
        &self,
        method: &str,
        params: &CallContractParams,
    ) -> WalletResult<CallContractResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_wire_shape() {
        let params = CallContractParams {
            contract: "ST1.vault-manager".to_string(),
            function_name: "claim-inheritance".to_string(),
            function_args: vec![ClarityValue::uint(7u32)],
            network: Network::Testnet,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "contract": "ST1.vault-manager",
                "functionName": "claim-inheritance",
                "functionArgs": [{"type": "uint", "value": "7"}],
                "network": "testnet"
            })
        );
    }

    #[test]
    fn test_response_without_txid() {
        let resp: CallContractResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.txid.is_none());

        let resp: CallContractResponse = serde_json::from_value(json!({"txid": "0xABC"})).unwrap();
        assert_eq!(resp, CallContractResponse::with_txid("0xABC"));
    }

    #[test]
    fn test_rejection_display_is_raw_message() {
        assert_eq!(WalletError::Rejected("User denied".into()).to_string(), "User denied");
        assert!(WalletError::Transport("refused".into())
            .to_string()
            .starts_with("Wallet transport error"));
    }
}
