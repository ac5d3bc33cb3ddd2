//! Tests for the password rule chain: every rule message and the
//! first-failure-wins ordering.

use latchkey_form::validate_password;

#[test]
fn empty_password_is_required() {
    let result = validate_password("");
    assert!(!result.valid);
    assert_eq!(result.message, "Password is required");
}

#[test]
fn short_password_reports_length() {
    // 7 characters.
    assert_eq!(
        validate_password("Short1!").message,
        "Password must be at least 8 characters"
    );
}

#[test]
fn password_without_uppercase() {
    assert_eq!(
        validate_password("alllowercase1!").message,
        "Password must have at least one uppercase character"
    );
}

#[test]
fn password_without_lowercase() {
    assert_eq!(
        validate_password("ALLUPPER1!").message,
        "Password must have at least one lowercase character"
    );
}

#[test]
fn password_without_number() {
    assert_eq!(
        validate_password("NoNumbers!").message,
        "Password must have at least one number"
    );
}

#[test]
fn password_without_special_character() {
    assert_eq!(
        validate_password("NoSpecials1").message,
        "Password must have at least one special character"
    );
}

#[test]
fn password_with_space() {
    // The space itself counts as a special character, so the chain reaches
    // the space rule and reports it.
    assert_eq!(
        validate_password("Has Space1!").message,
        "Password must not contain spaces"
    );
}

#[test]
fn valid_password_passes_with_empty_message() {
    let result = validate_password("ValidPass1!");
    assert!(result.valid);
    assert_eq!(result.message, "");
}

#[test]
fn short_password_reports_length_before_composition() {
    // "abc" also lacks uppercase, digits, and specials; length runs first.
    assert_eq!(
        validate_password("abc").message,
        "Password must be at least 8 characters"
    );
}

#[test]
fn weak_password_fails_rules_even_when_login_accepts_it() {
    // The submission gate accepts any present password, but the field
    // feedback still flags it.
    let result = validate_password("password123");
    assert!(!result.valid);
    assert_eq!(
        result.message,
        "Password must have at least one uppercase character"
    );
}

#[test]
fn revalidation_is_idempotent() {
    assert_eq!(
        validate_password("ValidPass1!"),
        validate_password("ValidPass1!")
    );
    assert_eq!(validate_password("Short1!"), validate_password("Short1!"));
}
