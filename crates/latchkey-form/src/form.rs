//! Login form state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::{Field, FormEvent, Intent, SubmitTrigger};
use crate::fields::{email_rules, password_rules};
use crate::gate;
use crate::validation::{ValidationResult, ValidatorChain};

/// The captured form values.
///
/// Owned by [`LoginForm`]; hosts receive clones through snapshots and
/// submission payloads. Field names serialize in camelCase to match the
/// emitted intent payload shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    /// Email address as typed.
    pub email: String,
    /// Password as typed.
    pub password: String,
    /// Whether the session should be remembered.
    pub remember_me: bool,
}

/// Per-field interaction state.
#[derive(Debug, Default)]
struct FieldState {
    touched: bool,
    dirty: bool,
    result: ValidationResult,
}

/// The login form state machine.
///
/// Tracks field values, per-field touched/dirty flags, and the last computed
/// [`ValidationResult`] per field. Host events go through [`LoginForm::apply`],
/// which returns the [`Intent`] the host should act on, if any.
#[derive(Debug)]
pub struct LoginForm {
    input: FormInput,
    email: FieldState,
    password: FieldState,
    email_rules: ValidatorChain,
    password_rules: ValidatorChain,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    /// Creates an empty form with the default login rules.
    pub fn new() -> Self {
        Self::with_rules(email_rules(), password_rules())
    }

    /// Creates an empty form with custom rule chains.
    pub fn with_rules(email_rules: ValidatorChain, password_rules: ValidatorChain) -> Self {
        Self {
            input: FormInput::default(),
            email: FieldState::default(),
            password: FieldState::default(),
            email_rules,
            password_rules,
        }
    }

    /// Applies a host event and returns the intent it produced, if any.
    ///
    /// Each event is handled to completion, including validation and
    /// derived-state updates, before the next one; the exclusive borrow makes
    /// partial validation states unobservable.
    pub fn apply(&mut self, event: FormEvent) -> Option<Intent> {
        match event {
            FormEvent::Input { field, value } => {
                self.set_value(field, value);
                None
            }
            FormEvent::Blur { field } => {
                self.revalidate(field);
                None
            }
            FormEvent::KeyRelease { field } => {
                // Password feedback is immediate; email waits for blur.
                if field == Field::Password {
                    self.revalidate(field);
                }
                None
            }
            FormEvent::RememberMe(value) => {
                self.input.remember_me = value;
                None
            }
            FormEvent::Submit(trigger) => self.submit(trigger),
            FormEvent::Google => {
                debug!("google login requested");
                Some(Intent::Google)
            }
            FormEvent::ForgotPassword => Some(Intent::ForgotPassword),
            FormEvent::SignUp => Some(Intent::SignUp),
        }
    }

    /// Returns the current value of a text field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.input.email,
            Field::Password => &self.input.password,
        }
    }

    /// Returns the last computed validation result for a field.
    ///
    /// A field that has never been interacted with reports a valid result
    /// with an empty message, even when its value is empty.
    pub fn validation(&self, field: Field) -> &ValidationResult {
        &self.field(field).result
    }

    /// Returns whether the field has been blurred or submitted.
    pub fn touched(&self, field: Field) -> bool {
        self.field(field).touched
    }

    /// Returns whether the field value has changed since creation.
    pub fn dirty(&self, field: Field) -> bool {
        self.field(field).dirty
    }

    /// Returns the remember-me flag.
    pub fn remember_me(&self) -> bool {
        self.input.remember_me
    }

    /// Recomputes overall validity from the current field values.
    ///
    /// Derived on every call rather than stored, so it can never go stale
    /// against the stored per-field results.
    pub fn is_valid(&self) -> bool {
        self.email_rules.check(&self.input.email).valid
            && self.password_rules.check(&self.input.password).valid
    }

    /// Returns a snapshot of the current input.
    pub fn snapshot(&self) -> FormInput {
        self.input.clone()
    }

    fn submit(&mut self, trigger: SubmitTrigger) -> Option<Intent> {
        let gate::Decision {
            email,
            password,
            accepted,
        } = gate::evaluate(&self.input, &self.email_rules, &self.password_rules);

        // Submission attempts surface field messages regardless of outcome.
        self.email.touched = true;
        self.email.result = email;
        self.password.touched = true;
        self.password.result = password;

        if accepted {
            debug!(?trigger, "submission accepted");
            Some(Intent::Submit(self.input.clone()))
        } else {
            debug!(
                ?trigger,
                email = %self.email.result.message,
                password = %self.password.result.message,
                "submission rejected"
            );
            None
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.input.email = value,
            Field::Password => self.input.password = value,
        }
        self.field_mut(field).dirty = true;
    }

    fn revalidate(&mut self, field: Field) {
        let result = match field {
            Field::Email => self.email_rules.check(&self.input.email),
            Field::Password => self.password_rules.check(&self.input.password),
        };
        let state = self.field_mut(field);
        state.touched = true;
        state.result = result;
    }

    fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}
