//! Submission gate.

use crate::form::FormInput;
use crate::validation::{ValidationResult, ValidatorChain};

/// Outcome of evaluating the gate on a submission trigger.
#[derive(Debug)]
pub(crate) struct Decision {
    pub email: ValidationResult,
    pub password: ValidationResult,
    pub accepted: bool,
}

/// Re-validates both fields from their current values and decides whether the
/// submission may proceed.
///
/// Stored field results are ignored so a stale-valid value can never slip
/// through. The email must pass its full rule chain. Login must keep
/// accepting passwords that predate the current strength rules, so the
/// password side only requires presence; the full rule results are still
/// returned for display.
pub(crate) fn evaluate(
    input: &FormInput,
    email_rules: &ValidatorChain,
    password_rules: &ValidatorChain,
) -> Decision {
    let email = email_rules.check(&input.email);
    let password = password_rules.check(&input.password);
    let accepted = email.valid && !input.password.trim().is_empty();
    Decision {
        email,
        password,
        accepted,
    }
}
