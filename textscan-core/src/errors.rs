//! errors.rs - Custom error types for the textscan-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `textscan-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
///
/// A failed match is never an error: extraction returning zero matches and
/// validation returning `false` are normal, successful results. Only problems
/// with the call itself (an unrecognized format token, a malformed pattern)
/// surface here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScanError {
    #[error("Unsupported date format '{0}' (expected \"MM/DD/YYYY\" or \"YYYY-MM-DD\")")]
    UnsupportedDateFormat(String),

    #[error("Failed to compile pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern length ({len}) exceeds maximum allowed ({max})")]
    PatternLengthExceeded { len: usize, max: usize },
}
