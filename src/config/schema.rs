//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::blockchain::types::{ContractRole, Network};

/// Root configuration for the vault service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// JSON API listener settings.
    pub server: ServerConfig,

    /// Network tag sent with every contract call.
    pub network: Network,

    /// Deployed contract identifiers.
    pub contracts: ContractsConfig,

    /// Which wallet provider to use.
    pub wallet: WalletConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// JSON API listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Timeout for API requests that do not wait on the wallet, in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Contract identifiers, each `<deployer address>.<contract name>`.
///
/// A missing or blank entry means the contract is not configured.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ContractsConfig {
    pub vault_manager: Option<String>,
    pub time_lock_controller: Option<String>,
    pub oracle_integration: Option<String>,
}

impl ContractsConfig {
    /// The configured identifier for `role`, if any.
    pub fn get(&self, role: ContractRole) -> Option<&str> {
        let raw = match role {
            ContractRole::VaultManager => &self.vault_manager,
            ContractRole::TimeLockController => &self.time_lock_controller,
            ContractRole::OracleIntegration => &self.oracle_integration,
        };
        raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn set(&mut self, role: ContractRole, identifier: impl Into<String>) {
        let slot = match role {
            ContractRole::VaultManager => &mut self.vault_manager,
            ContractRole::TimeLockController => &mut self.time_lock_controller,
            ContractRole::OracleIntegration => &mut self.oracle_integration,
        };
        *slot = Some(identifier.into());
    }

    /// All three contracts deployed under one address with their usual names.
    pub fn deployed_at(deployer: &str) -> Self {
        Self {
            vault_manager: Some(format!("{}.vault-manager", deployer)),
            time_lock_controller: Some(format!("{}.time-lock-controller", deployer)),
            oracle_integration: Some(format!("{}.oracle-integration", deployer)),
        }
    }
}

/// Wallet provider selection.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WalletMode {
    /// JSON-RPC wallet bridge.
    #[default]
    Bridge,
    /// In-process scripted wallet that approves every call.
    Mock,
}

/// Wallet configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalletConfig {
    pub mode: WalletMode,

    /// Wallet bridge JSON-RPC endpoint (bridge mode).
    pub bridge_url: String,

    /// Address reported by the mock wallet (mock mode).
    pub mock_address: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            mode: WalletMode::Bridge,
            bridge_url: "http://127.0.0.1:8765/rpc".to_string(),
            mock_address: crate::blockchain::mock::DEFAULT_MOCK_ADDRESS.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
