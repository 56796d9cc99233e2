//! replace.rs - Generic find-and-replace over caller-supplied patterns.
//!
//! Unlike the fixed grammar table, the pattern here is arbitrary caller
//! input, so it is compiled on demand through a thread-safe, process-wide
//! cache keyed by the pattern string. Repeated calls with the same pattern
//! reuse the compiled matcher.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use log::debug;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::errors::ScanError;

/// Maximum allowed length for a caller-supplied pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

lazy_static! {
    /// A thread-safe, global cache of compiled caller-supplied patterns.
    static ref PATTERN_CACHE: RwLock<HashMap<String, Arc<Regex>>> = RwLock::new(HashMap::new());
}

/// Compiles `pattern` into a matcher, serving from the cache when possible.
///
/// A pattern that cannot be compiled fails with [`ScanError::InvalidPattern`];
/// an over-long pattern is rejected up front with
/// [`ScanError::PatternLengthExceeded`], before any compilation work.
pub fn compile_pattern(pattern: &str) -> Result<Arc<Regex>, ScanError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(ScanError::PatternLengthExceeded {
            len: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    // Attempt to acquire a read lock first.
    {
        let cache = PATTERN_CACHE.read().unwrap();
        if let Some(regex) = cache.get(pattern) {
            debug!("Serving compiled pattern from cache: '{}'", pattern);
            return Ok(Arc::clone(regex));
        }
    } // Read lock is released here.

    let regex = RegexBuilder::new(pattern)
        .size_limit(10 * (1 << 20)) // 10 MB limit for the compiled matcher
        .build()
        .map_err(|source| ScanError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
    let regex = Arc::new(regex);

    PATTERN_CACHE
        .write()
        .unwrap()
        .insert(pattern.to_string(), Arc::clone(&regex));
    debug!("Compiled and cached pattern: '{}'", pattern);
    Ok(regex)
}

/// Replaces every non-overlapping occurrence of `pattern` in `text` with
/// `replacement`, left to right, and returns the resulting text.
///
/// The replacement is inserted literally; it is not a template, so `$` has
/// no special meaning in it. The input is never mutated. A malformed
/// pattern fails with [`ScanError::InvalidPattern`] rather than silently
/// matching nothing.
///
/// # Example
///
/// ```rust
/// use textscan_core::replace_pattern;
/// let scrubbed = replace_pattern("My SSN is 123-45-6789", r"\d{3}-\d{2}-\d{4}", "XXX-XX-XXXX")?;
/// assert_eq!(scrubbed, "My SSN is XXX-XX-XXXX");
/// # Ok::<(), textscan_core::ScanError>(())
/// ```
pub fn replace_pattern(text: &str, pattern: &str, replacement: &str) -> Result<String, ScanError> {
    let regex = compile_pattern(pattern)?;
    Ok(regex.replace_all(text, NoExpand(replacement)).into_owned())
}
