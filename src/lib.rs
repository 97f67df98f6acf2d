//! # texttcp
//!
//! A client for the TEXT TCP task protocol:
//! - Capability negotiation against a multi-line server greeting
//! - Single arithmetic task evaluation (integer and float domains)
//! - Strictly ordered, blocking, single-shot exchange
//!
//! ## Protocol Overview
//!
//! ```text
//! ┌──────────┐                            ┌──────────┐
//! │  Server  │                            │  Client  │
//! └────┬─────┘                            └────┬─────┘
//!      │ greeting (capability lines + "\n\n") │
//!      │──────────────────────────────────────▶
//!      │                               "OK\n" │
//!      ◀──────────────────────────────────────│
//!      │ task line: "op lhs rhs"              │
//!      │──────────────────────────────────────▶
//!      │             result line or "ERROR\n" │
//!      ◀──────────────────────────────────────│
//!      │ final acknowledgment                 │
//!      │──────────────────────────────────────▶
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ClientError, Result};
pub use config::Config;
pub use network::{Session, SessionOutcome, TcpConnection, Transport};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the texttcp client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
