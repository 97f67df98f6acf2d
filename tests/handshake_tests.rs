//! Handshake Tests
//!
//! Tests for greeting validation.

use texttcp::protocol::{validate_greeting, CAPABILITY_TOKEN};

// =============================================================================
// Accepted Greetings
// =============================================================================

#[test]
fn test_minimal_supported_greeting() {
    assert!(validate_greeting("TEXT TCP\n\n"));
}

#[test]
fn test_versioned_capability_line() {
    assert!(validate_greeting("TEXT TCP 1.0\n\n"));
}

#[test]
fn test_match_among_other_capabilities() {
    assert!(validate_greeting("BINARY TCP 1.1\nTEXT TCP 1.0\n\n"));
}

#[test]
fn test_match_order_does_not_matter() {
    assert!(validate_greeting("TEXT TCP 1.0\nBINARY TCP 1.1\n\n"));
}

#[test]
fn test_duplicate_capability_lines() {
    assert!(validate_greeting("TEXT TCP 1.0\nTEXT TCP 1.1\n\n"));
}

#[test]
fn test_prefix_match_without_separator() {
    // Anything starting with the token is accepted, prefix match only
    assert!(validate_greeting("TEXT TCPX\n\n"));
}

// =============================================================================
// Rejected Greetings
// =============================================================================

#[test]
fn test_missing_terminator() {
    assert!(!validate_greeting("TEXT TCP 1.0\n"));
}

#[test]
fn test_token_after_missing_terminator() {
    // The framing check runs before any line is inspected
    assert!(!validate_greeting("TEXT TCP 1.0\nmore"));
}

#[test]
fn test_empty_greeting() {
    assert!(!validate_greeting(""));
}

#[test]
fn test_single_line_break() {
    assert!(!validate_greeting("\n"));
}

#[test]
fn test_terminator_only() {
    assert!(!validate_greeting("\n\n"));
}

#[test]
fn test_no_supported_capability() {
    assert!(!validate_greeting("BINARY TCP 1.1\nUDP 2.0\n\n"));
}

#[test]
fn test_case_sensitive_token() {
    assert!(!validate_greeting("text tcp 1.0\n\n"));
}

#[test]
fn test_token_must_be_line_prefix() {
    assert!(!validate_greeting(" TEXT TCP 1.0\n\n"));
    assert!(!validate_greeting("PROTO TEXT TCP\n\n"));
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn test_validation_is_repeatable() {
    let greeting = "TEXT TCP 1.0\n\n";
    assert_eq!(validate_greeting(greeting), validate_greeting(greeting));
    assert!(greeting.starts_with(CAPABILITY_TOKEN));
}
