//! Startup orchestration.
//!
//! # Responsibilities
//! - Pick the wallet provider named by the config
//! - Build the controller and adopt any session the wallet already holds
//! - Assemble the API state

use std::sync::Arc;

use crate::api::AppState;
use crate::blockchain::bridge::HttpWalletBridge;
use crate::blockchain::mock::MockWallet;
use crate::blockchain::wallet::{WalletProvider, WalletResult};
use crate::config::schema::{AppConfig, WalletMode};
use crate::vault::controller::VaultController;
use crate::vault::model::VaultCatalog;

/// Construct the wallet provider selected in `config.wallet`.
pub fn build_wallet(config: &AppConfig) -> WalletResult<Arc<dyn WalletProvider>> {
    match config.wallet.mode {
        WalletMode::Bridge => {
            let bridge = HttpWalletBridge::new(&config.wallet.bridge_url)?;
            tracing::info!(endpoint = %bridge.endpoint(), "Using wallet bridge");
            Ok(Arc::new(bridge))
        }
        WalletMode::Mock => {
            tracing::warn!(
                address = %config.wallet.mock_address,
                "Using mock wallet; every call is approved without signing"
            );
            Ok(Arc::new(MockWallet::with_address(config.wallet.mock_address.clone())))
        }
    }
}

/// Wire the controller and the vault catalog together.
pub fn build_state(config: &AppConfig, wallet: Arc<dyn WalletProvider>) -> AppState {
    let controller = VaultController::from_config(config, wallet);
    if let Some(address) = controller.restore_session() {
        tracing::info!(address = %address, "Wallet session carried over");
    }

    AppState {
        controller: Arc::new(controller),
        catalog: Arc::new(VaultCatalog::demo_now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_mock_wallet() {
        let mut config = AppConfig::default();
        config.wallet.mode = WalletMode::Mock;
        config.wallet.mock_address = "ST2MOCK".into();

        let wallet = build_wallet(&config).unwrap();
        assert!(!wallet.is_connected());

        let state = build_state(&config, wallet);
        assert!(!state.controller.is_connected());
        assert_eq!(state.catalog.list().len(), 2);
    }

    #[test]
    fn test_bad_bridge_url() {
        let mut config = AppConfig::default();
        config.wallet.bridge_url = "not a url".into();
        assert!(build_wallet(&config).is_err());
    }
}
