// File: textscan-core/src/validators.rs
//! Whole-string validation functions for the supported formats.
//!
//! Each validator anchors the corresponding scanning grammar at both ends, so
//! the entire input must be a single well-formed token. A malformed value is
//! a normal `false`, never an error. The IP validator additionally applies a
//! numeric range check that the lexical grammar cannot express.
//!
//! License: MIT OR APACHE 2.0

use crate::grammars;

/// Returns `true` iff `email` as a whole is a well-formed email address.
///
/// # Example
///
/// ```rust
/// use textscan_core::validate_email;
/// assert!(validate_email("user@example.com"));
/// assert!(!validate_email("invalid-email"));
/// ```
pub fn validate_email(email: &str) -> bool {
    grammars::EMAIL_ANCHORED.is_match(email)
}

/// Returns `true` iff `phone` as a whole is a well-formed US phone number:
/// a 3-digit area code (optionally parenthesized) plus 7 further digits,
/// with `-`, `.`, space, or no separator between groups.
pub fn validate_phone_number(phone: &str) -> bool {
    grammars::PHONE_ANCHORED.is_match(phone)
}

/// Returns `true` iff `ip` as a whole is a valid IPv4 address.
///
/// Validation is two-phase. Phase 1 checks the lexical shape (four
/// dot-separated groups of 1-3 digits) and captures the groups; phase 2
/// parses each captured octet and requires it to fall in 0-255. The split
/// exists because the grammar constrains digit count, not digit value:
/// `256.0.0.1` passes phase 1 and fails phase 2.
pub fn validate_ip_address(ip: &str) -> bool {
    let Some(caps) = grammars::IPV4_ANCHORED.captures(ip) else {
        return false;
    };
    (1..=4).all(|i| octet_in_range(&caps[i]))
}

fn octet_in_range(octet: &str) -> bool {
    matches!(octet.parse::<u16>(), Ok(value) if value <= 255)
}
