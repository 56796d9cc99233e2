// textscan-core/tests/validator_tests.rs
use textscan_core::{
    extract_emails, extract_ip_addresses, extract_phone_numbers, validate_email,
    validate_ip_address, validate_phone_number,
};

#[test]
fn valid_and_invalid_emails() {
    assert!(validate_email("user@example.com"));
    assert!(validate_email("very.long.email.with.many.parts@domain-with-dash.com"));
    assert!(validate_email("email@domain.co.uk"));

    assert!(!validate_email(""));
    assert!(!validate_email("invalid-email"));
    assert!(!validate_email("no-at-sign.com"));
    assert!(!validate_email("@missing-username.com"));
    assert!(!validate_email("missing-domain@"));
}

#[test]
fn email_validation_is_whole_string_only() {
    // A well-formed address with surrounding context is not itself valid.
    assert!(!validate_email("write to user@example.com today"));
    assert!(!validate_email(" user@example.com"));
}

#[test]
fn valid_and_invalid_phone_numbers() {
    assert!(validate_phone_number("(123) 456-7890"));
    assert!(validate_phone_number("(123)456-7890"));
    assert!(validate_phone_number("123-456-7890"));
    assert!(validate_phone_number("123.456.7890"));
    assert!(validate_phone_number("123 456 7890"));
    assert!(validate_phone_number("1234567890"));

    assert!(!validate_phone_number(""));
    assert!(!validate_phone_number("555-1234"));
    assert!(!validate_phone_number("123-456"));
    assert!(!validate_phone_number("123-456-789a"));
}

#[test]
fn ip_validation_requires_syntax_and_range() {
    assert!(validate_ip_address("0.0.0.0"));
    assert!(validate_ip_address("255.255.255.255"));
    assert!(validate_ip_address("192.168.1.1"));

    // Syntactically plausible but out of numeric range.
    assert!(!validate_ip_address("256.0.0.1"));
    assert!(!validate_ip_address("192.168.1.256"));
    assert!(!validate_ip_address("999.999.999.999"));

    // Not even syntactically plausible.
    assert!(!validate_ip_address(""));
    assert!(!validate_ip_address("192.168.1"));
    assert!(!validate_ip_address("192.168.1.1.1"));
    assert!(!validate_ip_address("a.b.c.d"));
    assert!(!validate_ip_address("192.168.1.1 "));
}

#[test]
fn validators_agree_with_the_scanning_grammars() {
    // For a lone well-formed token with no surrounding context, whole-string
    // validation and scanning must agree on format boundaries.
    for email in ["user@example.com", "user.name+tag123@sub.domain-name.co.uk"] {
        assert!(validate_email(email));
        assert_eq!(extract_emails(email), [email]);
    }
    for phone in ["(123) 456-7890", "123.456.7890", "1234567890"] {
        assert!(validate_phone_number(phone));
        assert_eq!(extract_phone_numbers(phone), [phone]);
    }
    for ip in ["0.0.0.0", "255.255.255.255", "10.0.0.1"] {
        assert!(validate_ip_address(ip));
        assert_eq!(extract_ip_addresses(ip), [ip]);
    }
}
