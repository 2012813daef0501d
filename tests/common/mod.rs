//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use inheritance_vault::api::{build_router, AppState};
use inheritance_vault::blockchain::mock::MockWallet;
use inheritance_vault::blockchain::types::Network;
use inheritance_vault::config::{ContractsConfig, ServerConfig};
use inheritance_vault::vault::model::VaultCatalog;
use inheritance_vault::vault::VaultController;

pub const DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const BENEFICIARY_A: &str = "ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5";
pub const BENEFICIARY_B: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
pub const BTC_ADDRESS: &str = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";

pub fn vault_manager() -> String {
    format!("{}.vault-manager", DEPLOYER)
}

/// Controller with every contract deployed at [`DEPLOYER`] on testnet.
pub fn controller(wallet: Arc<MockWallet>) -> VaultController {
    controller_with(wallet, ContractsConfig::deployed_at(DEPLOYER))
}

pub fn controller_with(wallet: Arc<MockWallet>, contracts: ContractsConfig) -> VaultController {
    VaultController::new(wallet, contracts, Network::Testnet)
}

/// Controller whose wallet is already connected and adopted.
pub fn connected_controller() -> (Arc<MockWallet>, VaultController) {
    let wallet = Arc::new(MockWallet::new().already_connected());
    let ctl = controller(wallet.clone());
    assert!(ctl.restore_session().is_some());
    (wallet, ctl)
}

pub fn app_state(controller: VaultController) -> AppState {
    AppState {
        controller: Arc::new(controller),
        catalog: Arc::new(VaultCatalog::demo_now()),
    }
}

pub fn app(controller: VaultController) -> axum::Router {
    build_router(&ServerConfig::default(), app_state(controller))
}
