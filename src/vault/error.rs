//! Workflow error taxonomy.

use thiserror::Error;

use crate::blockchain::types::ContractRole;

/// Errors surfaced by the vault controller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VaultError {
    /// An action needed a connected wallet and there was none.
    #[error("Please connect your wallet first")]
    NotConnected,

    /// The target contract identifier was never configured.
    #[error("{0} contract address not configured")]
    ContractNotConfigured(ContractRole),

    /// The contract identifier is not of the form `<address>.<name>`.
    #[error("Malformed contract identifier '{0}'")]
    MalformedContractId(String),

    /// The user declined, or the wallet failed while handling the request.
    #[error("{0}")]
    WalletRejected(String),

    /// The wallet accepted the call but returned no transaction id.
    #[error("No transaction ID returned by wallet")]
    EmptyTxId,

    /// Connecting the wallet did not produce a usable session.
    #[error("{0}")]
    ConnectionFailed(String),
}

impl VaultError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            VaultError::NotConnected => "not_connected",
            VaultError::ContractNotConfigured(_) => "contract_not_configured",
            VaultError::MalformedContractId(_) => "malformed_contract_id",
            VaultError::WalletRejected(_) => "wallet_rejected",
            VaultError::EmptyTxId => "empty_tx_id",
            VaultError::ConnectionFailed(_) => "connection_failed",
        }
    }

    /// Whether this error is raised before any call reaches the wallet.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            VaultError::NotConnected
                | VaultError::ContractNotConfigured(_)
                | VaultError::MalformedContractId(_)
        )
    }
}

/// Result type for controller operations.
pub type VaultResult<T> = Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            VaultError::ContractNotConfigured(ContractRole::TimeLockController).to_string(),
            "Time lock controller contract address not configured"
        );
        assert_eq!(VaultError::WalletRejected("User denied".into()).to_string(), "User denied");
        assert_eq!(VaultError::EmptyTxId.to_string(), "No transaction ID returned by wallet");
    }

    #[test]
    fn test_precondition_split() {
        assert!(VaultError::NotConnected.is_precondition());
        assert!(VaultError::MalformedContractId("x".into()).is_precondition());
        assert!(!VaultError::EmptyTxId.is_precondition());
        assert!(!VaultError::WalletRejected("no".into()).is_precondition());
        assert_eq!(VaultError::EmptyTxId.kind(), "empty_tx_id");
    }
}
