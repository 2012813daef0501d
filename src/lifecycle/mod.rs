//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build wallet → Controller → Restore session
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Broadcast → API server stops accepting → in-flight requests drain
//! ```
//!
//! # Design Decisions
//! - Wallet calls already in flight are allowed to finish; there is no
//!   forced abort of a pending signature

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
