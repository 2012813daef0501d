//! Chain-specific types: network tag, contract identifiers and roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network tag passed to the wallet with every contract call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    /// An empty tag selects testnet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" | "" => Ok(Network::Testnet),
            other => Err(format!("unknown network '{}'", other)),
        }
    }
}

/// The three externally deployed contracts the dashboard talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractRole {
    VaultManager,
    TimeLockController,
    OracleIntegration,
}

impl ContractRole {
    pub const ALL: [ContractRole; 3] = [
        ContractRole::VaultManager,
        ContractRole::TimeLockController,
        ContractRole::OracleIntegration,
    ];
}

impl fmt::Display for ContractRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContractRole::VaultManager => "Vault manager",
            ContractRole::TimeLockController => "Time lock controller",
            ContractRole::OracleIntegration => "Oracle integration",
        };
        f.write_str(label)
    }
}

/// A fully qualified contract identifier, `<deployer address>.<contract name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractId {
    address: String,
    name: String,
}

impl ContractId {
    /// Split an identifier string into address and name.
    ///
    /// Returns `None` unless the split on `.` yields exactly two non-empty parts.
    pub fn parse(identifier: &str) -> Option<Self> {
        let mut parts = identifier.split('.');
        let address = parts.next()?;
        let name = parts.next()?;
        if parts.next().is_some() || address.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self {
            address: address.to_string(),
            name: name.to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.address, self.name)
    }
}
