//! Network Module
//!
//! Blocking TCP transport and the single-shot session exchange.
//!
//! ## Architecture
//! - One connection, one task, one exit
//! - `Transport` is the seam between the session logic and the socket
//! - All message buffers are local to a single session step

mod connection;
mod session;

pub use connection::{TcpConnection, Transport};
pub use session::{Session, SessionOutcome};
