//! extract.rs - Extraction of format tokens from free-form text.
//!
//! Every function here scans left to right, collecting all non-overlapping
//! substrings that satisfy the corresponding grammar, in source order, with
//! the matched text preserved verbatim. Zero matches is a normal result, not
//! an error, and the input is never modified.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ScanError;
use crate::format::DateFormat;
use crate::grammars;

/// A single matched token, with its byte span in the source text.
///
/// `text` is the verbatim matched substring, so for any match `m` produced
/// from `input`, `&input[m.start..m.end] == m.text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

fn scan(grammar: &Regex, text: &str) -> Vec<PatternMatch> {
    let matches: Vec<PatternMatch> = grammar
        .find_iter(text)
        .map(|m| PatternMatch {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
        .collect();
    debug!("Grammar '{}' matched {} time(s).", grammar.as_str(), matches.len());
    matches
}

fn scan_texts(grammar: &Regex, text: &str) -> Vec<String> {
    scan(grammar, text).into_iter().map(|m| m.text).collect()
}

/// Extracts all email addresses from `text`, in order of occurrence.
pub fn extract_emails(text: &str) -> Vec<String> {
    scan_texts(&grammars::EMAIL, text)
}

/// Extracts all US phone numbers from `text`, in order of occurrence.
///
/// Recognized layouts include `(123) 456-7890`, `123-456-7890`,
/// `123.456.7890`, `123 456 7890`, and `1234567890`.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    scan_texts(&grammars::PHONE, text)
}

/// Extracts all dates in the given layout from `text`, in order of occurrence.
pub fn extract_dates(text: &str, format: DateFormat) -> Vec<String> {
    scan_texts(format.grammar(), text)
}

/// Like [`extract_dates`], but takes the raw format token (`"MM/DD/YYYY"` or
/// `"YYYY-MM-DD"`). Any other token fails with
/// [`ScanError::UnsupportedDateFormat`] before any scanning happens.
pub fn extract_dates_str(text: &str, format: &str) -> Result<Vec<String>, ScanError> {
    let format: DateFormat = format.parse()?;
    Ok(extract_dates(text, format))
}

/// Extracts all syntactic IPv4 addresses from `text`, in order of occurrence.
///
/// This is a lexical scan only: four dot-separated 1-3 digit groups. Use
/// [`crate::validators::validate_ip_address`] to additionally enforce the
/// 0-255 octet range.
pub fn extract_ip_addresses(text: &str) -> Vec<String> {
    scan_texts(&grammars::IPV4, text)
}

/// Span-carrying variant of [`extract_emails`].
pub fn find_emails(text: &str) -> Vec<PatternMatch> {
    scan(&grammars::EMAIL, text)
}

/// Span-carrying variant of [`extract_phone_numbers`].
pub fn find_phone_numbers(text: &str) -> Vec<PatternMatch> {
    scan(&grammars::PHONE, text)
}

/// Span-carrying variant of [`extract_dates`].
pub fn find_dates(text: &str, format: DateFormat) -> Vec<PatternMatch> {
    scan(format.grammar(), text)
}

/// Span-carrying variant of [`extract_ip_addresses`].
pub fn find_ip_addresses(text: &str) -> Vec<PatternMatch> {
    scan(&grammars::IPV4, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_index_the_source_text() {
        let text = "Server: 192.168.1.1, Gateway: 10.0.0.1";
        for m in find_ip_addresses(text) {
            assert_eq!(&text[m.start..m.end], m.text);
        }
    }

    #[test]
    fn duplicates_are_preserved() {
        let text = "ping 10.0.0.1 then ping 10.0.0.1 again";
        assert_eq!(extract_ip_addresses(text), ["10.0.0.1", "10.0.0.1"]);
    }

    #[test]
    fn extract_dates_str_rejects_unknown_tokens() {
        let err = extract_dates_str("01/01/2023", "DD-MM-YYYY").unwrap_err();
        assert!(matches!(err, ScanError::UnsupportedDateFormat(_)));
    }
}
