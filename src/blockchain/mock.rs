//! Scripted in-process wallet.
//!
//! Used by the test suite and by the server's `mock` wallet mode. Outcomes are
//! queued ahead of time and consumed in request order; an empty queue
//! approves every call with a freshly generated transaction id.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::blockchain::wallet::{
    CallContractParams, CallContractResponse, WalletError, WalletProvider, WalletResult,
};

/// Address handed out when none is configured.
pub const DEFAULT_MOCK_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// How the mock answers one contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    /// Approve with this transaction id.
    Txid(String),
    /// Approve but omit the transaction id.
    MissingTxid,
    /// Reject with this message.
    Reject(String),
}

#[derive(Debug)]
struct Scripted {
    outcome: MockOutcome,
    latency: Duration,
}

#[derive(Debug, Default)]
struct MockState {
    connected: bool,
    address: Option<String>,
    connect_error: Option<String>,
    connect_without_address: bool,
    disconnect_error: Option<String>,
    script: VecDeque<Scripted>,
    requests: Vec<(String, CallContractParams)>,
}

/// A wallet that does what it is told.
#[derive(Debug)]
pub struct MockWallet {
    address: String,
    state: Mutex<MockState>,
}

impl MockWallet {
    /// A disconnected wallet that will hand out [`DEFAULT_MOCK_ADDRESS`].
    pub fn new() -> Self {
        Self::with_address(DEFAULT_MOCK_ADDRESS)
    }

    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            state: Mutex::new(MockState::default()),
        }
    }

    /// Mark the wallet as already connected, as if a previous page load
    /// left a session behind.
    pub fn already_connected(self) -> Self {
        {
            let mut state = self.state();
            state.connected = true;
            state.address = Some(self.address.clone());
        }
        self
    }

    /// Make the next `connect` calls fail with `message`.
    pub fn refuse_connect(&self, message: impl Into<String>) {
        self.state().connect_error = Some(message.into());
    }

    /// Make `connect` succeed without exposing any address.
    pub fn connect_without_address(&self) {
        self.state().connect_without_address = true;
    }

    /// Make `disconnect` report a teardown error (the session is still dropped).
    pub fn fail_disconnect(&self, message: impl Into<String>) {
        self.state().disconnect_error = Some(message.into());
    }

    /// Queue an outcome answered immediately.
    pub fn push(&self, outcome: MockOutcome) {
        self.push_delayed(outcome, Duration::ZERO);
    }

    /// Queue an outcome answered after `latency`.
    pub fn push_delayed(&self, outcome: MockOutcome, latency: Duration) {
        self.state().script.push_back(Scripted { outcome, latency });
    }

    pub fn push_txid(&self, txid: impl Into<String>) {
        self.push(MockOutcome::Txid(txid.into()));
    }

    pub fn push_rejection(&self, message: impl Into<String>) {
        self.push(MockOutcome::Reject(message.into()));
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<(String, CallContractParams)> {
        self.state().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockWallet {
    fn default() -> Self {
        Self::new()
    }
}

/// A 32-byte hex transaction id.
pub fn random_txid() -> String {
    format!(
        "0x{:016x}{:016x}{:016x}{:016x}",
        fastrand::u64(..),
        fastrand::u64(..),
        fastrand::u64(..),
        fastrand::u64(..)
    )
}

#[async_trait]
impl WalletProvider for MockWallet {
    fn is_connected(&self) -> bool {
        self.state().connected
    }

    async fn connect(&self) -> WalletResult<()> {
        let mut state = self.state();
        if let Some(message) = state.connect_error.clone() {
            return Err(WalletError::Rejected(message));
        }
        state.connected = true;
        state.address = if state.connect_without_address {
            None
        } else {
            Some(self.address.clone())
        };
        Ok(())
    }

    async fn disconnect(&self) -> WalletResult<()> {
        let mut state = self.state();
        state.connected = false;
        state.address = None;
        match state.disconnect_error.clone() {
            Some(message) => Err(WalletError::Transport(message)),
            None => Ok(()),
        }
    }

    fn address(&self) -> Option<String> {
        self.state().address.clone()
    }

    async fn request(
        &self,
        method: &str,
        params: &CallContractParams,
    ) -> WalletResult<CallContractResponse> {
        let scripted = {
            let mut state = self.state();
            state.requests.push((method.to_string(), params.clone()));
            state.script.pop_front()
        };

        let Some(Scripted { outcome, latency }) = scripted else {
            return Ok(CallContractResponse::with_txid(random_txid()));
        };

        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        match outcome {
            MockOutcome::Txid(txid) => Ok(CallContractResponse::with_txid(txid)),
            MockOutcome::MissingTxid => Ok(CallContractResponse::default()),
            MockOutcome::Reject(message) => Err(WalletError::Rejected(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::types::Network;
    use crate::blockchain::wallet::CALL_CONTRACT_METHOD;

    fn params() -> CallContractParams {
        CallContractParams {
            contract: "ST1.vault-manager".into(),
            function_name: "claim-inheritance".into(),
            function_args: vec![],
            network: Network::Testnet,
        }
    }

    #[tokio::test]
    async fn test_connect_exposes_address() {
        let wallet = MockWallet::with_address("ST2TEST");
        assert!(!wallet.is_connected());
        assert!(wallet.address().is_none());

        wallet.connect().await.unwrap();
        assert!(wallet.is_connected());
        assert_eq!(wallet.address().as_deref(), Some("ST2TEST"));

        wallet.disconnect().await.unwrap();
        assert!(!wallet.is_connected());
        assert!(wallet.address().is_none());
    }

    #[tokio::test]
    async fn test_script_is_consumed_in_order() {
        let wallet = MockWallet::new();
        wallet.push_txid("0x1");
        wallet.push(MockOutcome::MissingTxid);
        wallet.push_rejection("User denied");

        let first = wallet.request(CALL_CONTRACT_METHOD, &params()).await.unwrap();
        assert_eq!(first.txid.as_deref(), Some("0x1"));

        let second = wallet.request(CALL_CONTRACT_METHOD, &params()).await.unwrap();
        assert!(second.txid.is_none());

        let third = wallet.request(CALL_CONTRACT_METHOD, &params()).await;
        assert_eq!(third, Err(WalletError::Rejected("User denied".into())));

        // Empty script approves with a generated id.
        let fourth = wallet.request(CALL_CONTRACT_METHOD, &params()).await.unwrap();
        assert_eq!(fourth.txid.map(|t| t.len()), Some(66));

        assert_eq!(wallet.request_count(), 4);
        assert_eq!(wallet.requests()[0].0, CALL_CONTRACT_METHOD);
    }

    #[tokio::test]
    async fn test_refused_connect() {
        let wallet = MockWallet::new();
        wallet.refuse_connect("User closed the popup");
        let err = wallet.connect().await.unwrap_err();
        assert_eq!(err.to_string(), "User closed the popup");
        assert!(!wallet.is_connected());
    }
}
