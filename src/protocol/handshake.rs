//! Capability negotiation
//!
//! Validates the server's greeting before the session proceeds.

/// The capability this client implements, matched as a case-sensitive
/// line prefix in the greeting
pub const CAPABILITY_TOKEN: &str = "TEXT TCP";

/// The double line break that terminates a well-formed greeting
pub const GREETING_TERMINATOR: &str = "\n\n";

/// Acknowledgment sent after a greeting is accepted
pub const ACKNOWLEDGMENT: &str = "OK\n";

/// Validate a server greeting.
///
/// A greeting is accepted iff it is terminated by two consecutive line
/// breaks and at least one of its lines starts with [`CAPABILITY_TOKEN`].
/// One match anywhere suffices; no ordering or de-duplication applies.
///
/// Rejection is fatal to the calling session: the caller must abort
/// without sending the acknowledgment.
pub fn validate_greeting(greeting: &str) -> bool {
    // Malformed framing is rejected before any line is inspected.
    if !greeting.ends_with(GREETING_TERMINATOR) {
        return false;
    }

    greeting
        .lines()
        .any(|line| line.starts_with(CAPABILITY_TOKEN))
}
