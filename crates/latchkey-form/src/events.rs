//! Events consumed from the host and intents emitted back to it.

use serde::Serialize;

use crate::form::FormInput;

/// A validated input field of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// What caused a submission attempt.
///
/// All triggers are routed through the same gate; the distinction only shows
/// up in logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// The primary submit button was activated.
    Button,
    /// The Enter key was released while focus was inside the form.
    EnterKey,
    /// A native form submission fired.
    FormSubmit,
}

/// A notification from the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The value of a field changed.
    Input { field: Field, value: String },
    /// Focus left a field.
    Blur { field: Field },
    /// A key was released inside a field.
    KeyRelease { field: Field },
    /// The remember-me checkbox was set.
    RememberMe(bool),
    /// A submission attempt.
    Submit(SubmitTrigger),
    /// The Google login button was activated.
    Google,
    /// The forgot-password link was activated.
    ForgotPassword,
    /// The sign-up link was activated.
    SignUp,
}

/// An intent emitted for the host to act on.
///
/// Serializes as an internally tagged object, e.g.
/// `{"intent":"submit","email":"...","password":"...","rememberMe":false}`
/// or `{"intent":"google"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "camelCase")]
pub enum Intent {
    /// Log in with the captured credentials.
    Submit(FormInput),
    /// Log in through Google instead.
    Google,
    /// Start password recovery.
    ForgotPassword,
    /// Go to account registration.
    SignUp,
}
