//! grammars.rs - The format grammars recognized by TextScan.
//!
//! Each supported format is described by a single pattern string, compiled
//! once at first use into two process-wide constants: a scanning form used by
//! extraction, and an anchored form used by validation. Sharing the pattern
//! body between the two guarantees the scanner and the validator agree on
//! what a well-formed token looks like.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// Email: local part of letters, digits, and `._%+-`, then `@`, then a
/// domain of letters, digits, dots, and dashes ending in a TLD of at least
/// two letters. Dots in the domain class cover subdomains.
pub(crate) const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// US phone: optionally parenthesized 3-digit area code, then 3 and 4 digit
/// groups, with `-`, `.`, space, or nothing between groups.
pub(crate) const PHONE_PATTERN: &str = r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";

/// MM/DD/YYYY with 1-2 digit month and day. The `\b` assertions keep a match
/// from starting or ending inside a longer digit run, so `12/31/20233`
/// yields nothing rather than a truncated date.
pub(crate) const DATE_MDY_PATTERN: &str = r"\b\d{1,2}/\d{1,2}/\d{4}\b";

/// YYYY-MM-DD with 1-2 digit month and day, same boundary discipline.
pub(crate) const DATE_YMD_PATTERN: &str = r"\b\d{4}-\d{1,2}-\d{1,2}\b";

/// IPv4: four dot-separated groups of 1-3 digits. Purely syntactic; the
/// 0-255 range check lives in `validators`, not in the grammar. The `\b`
/// assertions mean `1234.5.6.7` produces no match at all.
pub(crate) const IPV4_PATTERN: &str = r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b";

/// Anchored IPv4 form with one capture group per octet, consumed by the
/// two-phase validator.
const IPV4_ANCHORED_PATTERN: &str = r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$";

fn compile(pattern: &str) -> Regex {
    // All grammar patterns are fixed string literals; a failure here is a
    // programming error in this module, caught by the unit tests below.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in grammar '{pattern}': {e}"))
}

fn compile_anchored(pattern: &str) -> Regex {
    compile(&format!("^(?:{pattern})$"))
}

pub(crate) static EMAIL: Lazy<Regex> = Lazy::new(|| compile(EMAIL_PATTERN));
pub(crate) static EMAIL_ANCHORED: Lazy<Regex> = Lazy::new(|| compile_anchored(EMAIL_PATTERN));

pub(crate) static PHONE: Lazy<Regex> = Lazy::new(|| compile(PHONE_PATTERN));
pub(crate) static PHONE_ANCHORED: Lazy<Regex> = Lazy::new(|| compile_anchored(PHONE_PATTERN));

pub(crate) static DATE_MDY: Lazy<Regex> = Lazy::new(|| compile(DATE_MDY_PATTERN));
pub(crate) static DATE_YMD: Lazy<Regex> = Lazy::new(|| compile(DATE_YMD_PATTERN));

pub(crate) static IPV4: Lazy<Regex> = Lazy::new(|| compile(IPV4_PATTERN));
pub(crate) static IPV4_ANCHORED: Lazy<Regex> = Lazy::new(|| compile(IPV4_ANCHORED_PATTERN));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grammars_compile() {
        // Force every Lazy so a bad pattern fails loudly here instead of at
        // first use in production code.
        for re in [
            &*EMAIL,
            &*EMAIL_ANCHORED,
            &*PHONE,
            &*PHONE_ANCHORED,
            &*DATE_MDY,
            &*DATE_YMD,
            &*IPV4,
            &*IPV4_ANCHORED,
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn ipv4_anchored_captures_four_octets() {
        let caps = IPV4_ANCHORED.captures("192.168.1.1").unwrap();
        assert_eq!(caps.len(), 5);
        assert_eq!(&caps[1], "192");
        assert_eq!(&caps[4], "1");
    }

    #[test]
    fn digit_run_boundaries_suppress_partial_matches() {
        // A leading digit glued to the first octet invalidates the whole run.
        assert!(IPV4.find("1234.5.6.7").is_none());
        // Same policy for dates: a 5-digit year tail is not a date.
        assert!(DATE_MDY.find("12/31/20233").is_none());
        assert!(DATE_YMD.find("20233-01-01").is_none());
    }
}
