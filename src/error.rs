//! Error types for the texttcp client
//!
//! Provides a unified error type for all session-fatal conditions.
//! Business-level computation failures (division by zero, unknown
//! operators) are NOT errors here — they are the normal `ERROR` result
//! line defined by the protocol.

use thiserror::Error;

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

/// Unified error type for session-fatal failures
#[derive(Debug, Error)]
pub enum ClientError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Connection error: {0}")]
    Connection(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
