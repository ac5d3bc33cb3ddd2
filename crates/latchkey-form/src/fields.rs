//! Rule sets for the login form fields.

use crate::validation::{
    CharClassValidator, EmailValidator, MaxLengthValidator, MinLengthValidator, NoSpacesValidator,
    RequiredValidator, ValidationResult, ValidatorChain,
};

/// Maximum accepted email length, in characters.
const EMAIL_MAX_LENGTH: usize = 100;

/// Minimum accepted password length, in characters.
const PASSWORD_MIN_LENGTH: usize = 8;

/// Builds the ordered rule chain for the email field.
///
/// The length rule sits behind the format rule, so an overlong value that is
/// also malformed reports the format message.
pub fn email_rules() -> ValidatorChain {
    ValidatorChain::new()
        .validator(RequiredValidator::with_message("E-mail is required"))
        .validator(EmailValidator::with_message("E-mail must be valid"))
        .validator(MaxLengthValidator::with_message(
            EMAIL_MAX_LENGTH,
            "E-mail must be less than 100 characters",
        ))
}

/// Builds the ordered rule chain for the password field.
pub fn password_rules() -> ValidatorChain {
    ValidatorChain::new()
        .validator(RequiredValidator::with_message("Password is required"))
        .validator(MinLengthValidator::with_message(
            PASSWORD_MIN_LENGTH,
            "Password must be at least 8 characters",
        ))
        .validator(CharClassValidator::new(
            |c| c.is_ascii_uppercase(),
            "Password must have at least one uppercase character",
        ))
        .validator(CharClassValidator::new(
            |c| c.is_ascii_lowercase(),
            "Password must have at least one lowercase character",
        ))
        .validator(CharClassValidator::new(
            |c| c.is_ascii_digit(),
            "Password must have at least one number",
        ))
        .validator(CharClassValidator::new(
            |c| !c.is_ascii_alphanumeric(),
            "Password must have at least one special character",
        ))
        .validator(NoSpacesValidator::with_message(
            "Password must not contain spaces",
        ))
}

/// Validates an email value against the login form rules.
pub fn validate_email(value: &str) -> ValidationResult {
    email_rules().check(value)
}

/// Validates a password value against the login form rules.
pub fn validate_password(value: &str) -> ValidationResult {
    password_rules().check(value)
}
