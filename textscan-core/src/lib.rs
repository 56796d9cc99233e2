// textscan-core/src/lib.rs
//! # TextScan Core Library
//!
//! `textscan-core` provides the fundamental, platform-independent logic for
//! extracting and validating common structured data formats (email addresses,
//! US phone numbers, dates, IPv4 addresses) embedded in free-form text, plus
//! a generic find-and-replace utility over arbitrary caller-supplied
//! patterns. Typical uses are PII redaction, log scrubbing, and data
//! cleaning.
//!
//! The library is designed to be pure and stateless: every operation is a
//! synchronous function from its inputs to its result, with no I/O, no
//! shared mutable state, and no mutation of arguments. The only process-wide
//! state is the read-only grammar table and a cache of compiled
//! caller-supplied patterns, both safe for unsynchronized concurrent use.
//!
//! ## Modules
//!
//! * `grammars`: the four format grammars, compiled once as process-wide constants.
//! * `format`: the [`DateFormat`] selector for date extraction.
//! * `extract`: left-to-right extraction of all matching substrings.
//! * `validators`: anchored whole-string validation, including the IP octet range check.
//! * `replace`: generic pattern replacement with a compiled-pattern cache.
//! * `errors`: the [`ScanError`] error enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use textscan_core::{
//!     extract_emails, extract_dates, validate_ip_address, replace_pattern, DateFormat,
//! };
//!
//! fn main() -> Result<(), textscan_core::ScanError> {
//!     let text = "Contact us at support@example.com or info@company.org";
//!     assert_eq!(extract_emails(text), ["support@example.com", "info@company.org"]);
//!
//!     let dates = extract_dates("Start: 01/15/2023, End: 12/31/2023", DateFormat::MonthDayYear);
//!     assert_eq!(dates, ["01/15/2023", "12/31/2023"]);
//!
//!     assert!(validate_ip_address("255.255.255.255"));
//!     assert!(!validate_ip_address("256.0.0.1"));
//!
//!     let scrubbed = replace_pattern("My SSN is 123-45-6789", r"\d{3}-\d{2}-\d{4}", "XXX-XX-XXXX")?;
//!     assert_eq!(scrubbed, "My SSN is XXX-XX-XXXX");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! A non-match is never an error: extraction yields an empty vector and
//! validation returns `false`. [`ScanError`] is reserved for problems with
//! the call itself, namely an unrecognized date format token or a malformed
//! replacement pattern, and is always reported synchronously before any
//! scanning.
//!
//! ## Design Principles
//!
//! * **Grammars as data:** each format is a declarative pattern compiled once
//!   at first use, shared by extraction and validation.
//! * **Syntax, then semantics:** where a format carries value constraints the
//!   lexical grammar cannot express (the IPv4 octet range), validation runs a
//!   separate numeric phase after the syntactic match.
//! * **Stateless:** no operation depends on or influences any other call.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod errors;
pub mod extract;
pub mod format;
mod grammars;
pub mod replace;
pub mod validators;

/// Re-exports the custom error type for clear error reporting.
pub use errors::ScanError;

/// Re-exports the date format selector.
pub use format::DateFormat;

/// Re-exports the extraction operations and the span-carrying match type.
pub use extract::{
    extract_dates, extract_dates_str, extract_emails, extract_ip_addresses,
    extract_phone_numbers, find_dates, find_emails, find_ip_addresses, find_phone_numbers,
    PatternMatch,
};

/// Re-exports the whole-string validators.
pub use validators::{validate_email, validate_ip_address, validate_phone_number};

/// Re-exports generic pattern replacement and the pattern compiler.
pub use replace::{compile_pattern, replace_pattern, MAX_PATTERN_LENGTH};
