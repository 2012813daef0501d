//! Vault workflow subsystem.
//!
//! # Data Flow
//! ```text
//! Presentation layer (api/, vault-cli)
//!     → form.rs (draft validation, STX → microunits)
//!     → operations.rs (contract lookup, argument shaping)
//!     → controller.rs (session check, wallet dispatch, log append)
//!     → TransactionRecord log + last error, read back for display
//!
//! Dashboard reads:
//!     → model.rs (vault records, summary)
//!     → display.rs (formatting helpers)
//! ```
//!
//! # Design Decisions
//! - One controller owns session, log and last error; callers hold an `Arc`
//! - The wallet is injected, never reached through global state
//! - No retries and no deduplication: every submit is a fresh wallet request

pub mod controller;
pub mod display;
pub mod error;
pub mod form;
pub mod model;
pub mod operations;
pub mod types;

pub use controller::VaultController;
pub use error::{VaultError, VaultResult};
pub use form::{BeneficiaryShare, VaultDraft};
pub use model::{DashboardSummary, Vault, VaultCatalog, VaultStatus};
pub use types::{CreateVaultParams, Session, TransactionRecord, TxStatus};
