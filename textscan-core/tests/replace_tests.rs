// textscan-core/tests/replace_tests.rs
use anyhow::Result;
use textscan_core::{replace_pattern, ScanError};

#[test]
fn replaces_a_single_occurrence() -> Result<()> {
    let out = replace_pattern("My SSN is 123-45-6789", r"\d{3}-\d{2}-\d{4}", "XXX-XX-XXXX")?;
    assert_eq!(out, "My SSN is XXX-XX-XXXX");
    Ok(())
}

#[test]
fn replaces_every_occurrence_left_to_right() -> Result<()> {
    let text = "Contact: john@example.com, Phone: 123-456-7890, Alt: jane@example.com";
    let out = replace_pattern(text, r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}", "[EMAIL]")?;
    assert_eq!(out, "Contact: [EMAIL], Phone: 123-456-7890, Alt: [EMAIL]");
    Ok(())
}

#[test]
fn is_idempotent_once_no_matches_remain() -> Result<()> {
    let once = replace_pattern("My SSN is 123-45-6789", r"\d{3}-\d{2}-\d{4}", "XXX-XX-XXXX")?;
    let twice = replace_pattern(&once, r"\d{3}-\d{2}-\d{4}", "XXX-XX-XXXX")?;
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn no_match_returns_the_text_unchanged() -> Result<()> {
    let out = replace_pattern("nothing to see here", r"\d{9}", "[ID]")?;
    assert_eq!(out, "nothing to see here");
    Ok(())
}

#[test]
fn empty_replacement_deletes_matches() -> Result<()> {
    let out = replace_pattern("a1b22c333", r"\d+", "")?;
    assert_eq!(out, "abc");
    Ok(())
}

#[test]
fn malformed_pattern_is_a_syntax_error_not_a_silent_no_match() {
    let err = replace_pattern("text", r"[unclosed", "x").unwrap_err();
    match err {
        ScanError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}
