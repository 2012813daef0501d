//! JSON-RPC client for a local wallet bridge.
//!
//! # Responsibilities
//! - Ask the bridge for the user's addresses on connect
//! - Forward `stx_callContract` requests and return the wallet's answer
//! - Turn JSON-RPC error objects into rejections carrying the wallet's message
//!
//! No request timeout is applied: a signing prompt may legitimately stay open
//! for as long as the user needs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::blockchain::wallet::{
    CallContractParams, CallContractResponse, WalletError, WalletProvider, WalletResult,
};

/// Method used to discover the connected addresses.
pub const GET_ADDRESSES_METHOD: &str = "getAddresses";

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    #[serde(default)]
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct AddressesResult {
    #[serde(default)]
    addresses: Vec<AddressEntry>,
}

#[derive(Debug, Deserialize)]
struct AddressEntry {
    address: String,
    #[serde(default)]
    symbol: Option<String>,
}

impl AddressEntry {
    fn is_stacks(&self) -> bool {
        match &self.symbol {
            Some(symbol) => symbol.eq_ignore_ascii_case("STX"),
            None => self.address.starts_with("SP") || self.address.starts_with("ST"),
        }
    }
}

/// Wallet provider backed by an HTTP JSON-RPC bridge.
pub struct HttpWalletBridge {
    client: reqwest::Client,
    endpoint: url::Url,
    connected: AtomicBool,
    address: Mutex<Option<String>>,
    next_id: AtomicU64,
}

impl HttpWalletBridge {
    /// Create a bridge client for `endpoint`.
    pub fn new(endpoint: &str) -> WalletResult<Self> {
        let endpoint: url::Url = endpoint.parse().map_err(|e| {
            WalletError::Transport(format!("Invalid wallet bridge URL '{}': {}", endpoint, e))
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            connected: AtomicBool::new(false),
            address: Mutex::new(None),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    async fn call<P: Serialize + Send + Sync>(&self, method: &str, params: P) -> WalletResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| WalletError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| WalletError::Transport(e.to_string()))?;

        let parsed: RpcResponse = serde_json::from_str(&text).map_err(|e| {
            WalletError::Transport(format!("Bridge returned status {} with unreadable body: {}", status, e))
        })?;

        if let Some(err) = parsed.error {
            tracing::debug!(method = method, code = err.code, "Wallet bridge returned an error");
            return Err(WalletError::Rejected(err.message));
        }

        Ok(parsed.result.unwrap_or(Value::Null))
    }

    fn cached_address(&self) -> MutexGuard<'_, Option<String>> {
        self.address.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl WalletProvider for HttpWalletBridge {
    /// True once `getAddresses` succeeded, even if it listed no STX address.
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn connect(&self) -> WalletResult<()> {
        let result = self.call(GET_ADDRESSES_METHOD, serde_json::json!({})).await?;
        let parsed: AddressesResult = serde_json::from_value(result)
            .map_err(|e| WalletError::Transport(format!("Malformed getAddresses result: {}", e)))?;

        let stx = parsed
            .addresses
            .into_iter()
            .find(AddressEntry::is_stacks)
            .map(|entry| entry.address);

        *self.cached_address() = stx;
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&self) -> WalletResult<()> {
        self.connected.store(false, Ordering::SeqCst);
        self.cached_address().take();
        Ok(())
    }

    fn address(&self) -> Option<String> {
        self.cached_address().clone()
    }

    async fn request(
        &self,
        method: &str,
        params: &CallContractParams,
    ) -> WalletResult<CallContractResponse> {
        let result = self.call(method, params).await?;
        if result.is_null() {
            return Ok(CallContractResponse::default());
        }
        serde_json::from_value(result)
            .map_err(|e| WalletError::Transport(format!("Malformed {} result: {}", method, e)))
    }
}
