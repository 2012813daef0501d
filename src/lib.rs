//! Inheritance vault dashboard backend.
//!
//! Drives a wallet through the contract calls of the inheritance vault
//! protocol and keeps a session-scoped transaction log for the UI.

pub mod api;
pub mod blockchain;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod vault;

pub use api::{build_router, ApiServer, AppState};
pub use config::schema::AppConfig;
pub use lifecycle::Shutdown;
pub use vault::{VaultController, VaultError};
