//! Wallet and contract-call plumbing.
//!
//! # Data Flow
//! ```text
//! Domain operation (vault/operations.rs)
//!     → clarity.rs (typed arguments)
//!     → types.rs (contract id parsing, network tag)
//!     → wallet.rs (WalletProvider capability)
//!         → bridge.rs (JSON-RPC wallet bridge)
//!         → mock.rs (scripted wallet for tests and demo mode)
//! ```
//!
//! # Security Constraints
//! - Signing happens in the wallet; this crate never holds key material
//! - Argument values are not logged, only their count and types

pub mod bridge;
pub mod clarity;
pub mod mock;
pub mod types;
pub mod wallet;

pub use bridge::HttpWalletBridge;
pub use clarity::ClarityValue;
pub use mock::{MockOutcome, MockWallet};
pub use types::{ContractId, ContractRole, Network};
pub use wallet::{
    CallContractParams, CallContractResponse, WalletError, WalletProvider, WalletResult,
    CALL_CONTRACT_METHOD,
};
