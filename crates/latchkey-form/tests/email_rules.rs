//! Tests for the email rule chain: requiredness, format, length, and the
//! ordering between them.

use latchkey_form::validate_email;

#[test]
fn empty_email_is_required() {
    let result = validate_email("");
    assert!(!result.valid);
    assert_eq!(result.message, "E-mail is required");
}

#[test]
fn whitespace_only_email_is_required() {
    assert_eq!(validate_email("   ").message, "E-mail is required");
}

#[test]
fn malformed_email_reports_format() {
    let result = validate_email("invalidEmail");
    assert!(!result.valid);
    assert_eq!(result.message, "E-mail must be valid");
}

#[test]
fn missing_local_part_reports_format() {
    assert_eq!(validate_email("@example.com").message, "E-mail must be valid");
}

#[test]
fn missing_tld_reports_format() {
    assert_eq!(validate_email("user@example").message, "E-mail must be valid");
}

#[test]
fn overlong_email_reports_length() {
    // 110 characters, well-formed: format passes, length fails.
    let result = validate_email(
        "thisisaverylongemailnameindeedatthisservice@averyspecificandlongsubdomain.exampledomainforillustrationonly.com",
    );
    assert!(!result.valid);
    assert_eq!(result.message, "E-mail must be less than 100 characters");
}

#[test]
fn malformed_overlong_email_reports_format_first() {
    // Longer than 100 characters but not email-shaped: the format rule runs
    // first, so its message wins.
    let value = "x".repeat(150);
    assert_eq!(validate_email(&value).message, "E-mail must be valid");
}

#[test]
fn boundary_length_email_is_valid() {
    // Exactly 100 characters: 88 + "@" + "example.com".
    let value = format!("{}@example.com", "a".repeat(88));
    assert_eq!(value.chars().count(), 100);
    assert!(validate_email(&value).valid);
}

#[test]
fn valid_email_passes_with_empty_message() {
    let result = validate_email("test@example.com");
    assert!(result.valid);
    assert_eq!(result.message, "");
}

#[test]
fn revalidation_is_idempotent() {
    assert_eq!(
        validate_email("test@example.com"),
        validate_email("test@example.com")
    );
    assert_eq!(validate_email("invalidEmail"), validate_email("invalidEmail"));
}
