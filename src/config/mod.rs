//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, environment overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → contracts + network handed to VaultController
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - An unset contract is legal; the operations that need it fail with
//!   `ContractNotConfigured`
//! - Environment variables override file values

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AppConfig;
pub use schema::ContractsConfig;
pub use schema::ObservabilityConfig;
pub use schema::ServerConfig;
pub use schema::WalletConfig;
pub use schema::WalletMode;
