//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate listener and metrics addresses, wallet bridge URL, log level
//! - Warn about contract identifiers that will fail at call time
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Malformed contract ids are not fatal; each affected call reports
//!   `MalformedContractId` on its own

use std::net::SocketAddr;
use thiserror::Error;

use crate::blockchain::types::{ContractId, ContractRole};
use crate::config::schema::{AppConfig, WalletMode};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),

    #[error("wallet.bridge_url '{0}' is not a valid URL")]
    BridgeUrl(String),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    LogLevel(String),

    #[error("server.request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Check `config`, returning every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.server.bind_address.clone()));
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if config.wallet.mode == WalletMode::Bridge && url::Url::parse(&config.wallet.bridge_url).is_err() {
        errors.push(ValidationError::BridgeUrl(config.wallet.bridge_url.clone()));
    }

    for role in ContractRole::ALL {
        match config.contracts.get(role) {
            None => tracing::warn!(role = %role, "Contract not configured; its operations will fail"),
            Some(id) if ContractId::parse(id).is_none() => {
                tracing::warn!(role = %role, contract = id, "Contract identifier is malformed")
            }
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.server.bind_address = "nowhere".into();
        config.server.request_timeout_secs = 0;
        config.observability.log_level = "loud".into();
        config.wallet.bridge_url = "::".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::LogLevel("loud".into())));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
    }

    #[test]
    fn test_mock_mode_ignores_bridge_url() {
        let mut config = AppConfig::default();
        config.wallet.mode = WalletMode::Mock;
        config.wallet.bridge_url = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_malformed_contract_is_not_fatal() {
        let mut config = AppConfig::default();
        config.contracts.vault_manager = Some("vault-manager".into());
        assert!(validate_config(&config).is_ok());
    }
}
