//! # latchkey-form
//!
//! Validation and submission state machine for a login form.
//!
//! This crate provides:
//! - Ordered, short-circuiting field validators for email and password
//! - A [`LoginForm`] state holder tracking values, touched/dirty flags, and
//!   per-field validation results
//! - A submission gate that emits [`Intent`] values for the host to act on
//!
//! Rendering, routing, and the authentication backend stay outside: the form
//! consumes UI events and emits intents, nothing else. Events are applied one
//! at a time through [`LoginForm::apply`]; each event is handled to
//! completion, including derived-state recomputation, before the next one.
//!
//! ## Quick Start
//!
//! ```rust
//! use latchkey_form::{Field, FormEvent, Intent, LoginForm, SubmitTrigger};
//!
//! let mut form = LoginForm::new();
//! form.apply(FormEvent::Input {
//!     field: Field::Email,
//!     value: "test@example.com".into(),
//! });
//! form.apply(FormEvent::Input {
//!     field: Field::Password,
//!     value: "password123".into(),
//! });
//!
//! let intent = form.apply(FormEvent::Submit(SubmitTrigger::Button));
//! assert!(matches!(intent, Some(Intent::Submit(_))));
//! ```
//!
//! ## Field Validation
//!
//! The validators are pure functions and can be used on their own:
//!
//! ```rust
//! use latchkey_form::{validate_email, validate_password};
//!
//! assert!(validate_email("test@example.com").valid);
//! assert_eq!(validate_email("").message, "E-mail is required");
//! assert_eq!(
//!     validate_password("Short1!").message,
//!     "Password must be at least 8 characters",
//! );
//! ```
//!
//! ## Custom Rules
//!
//! Hosts can swap in their own rule chains, built from the validators in
//! [`validation`]:
//!
//! ```rust
//! use latchkey_form::validation::{RegexValidator, RequiredValidator, ValidatorChain};
//! use latchkey_form::{password_rules, LoginForm};
//!
//! let corporate = ValidatorChain::new()
//!     .validator(RequiredValidator::with_message("E-mail is required"))
//!     .validator(
//!         RegexValidator::new(r"@example\.com$", "Use your work address")
//!             .expect("valid pattern"),
//!     );
//!
//! let form = LoginForm::with_rules(corporate, password_rules());
//! # let _ = form;
//! ```

mod error;
mod events;
pub mod fields;
mod form;
mod gate;
pub mod validation;

pub use error::{FormError, Result};
pub use events::{Field, FormEvent, Intent, SubmitTrigger};
pub use fields::{email_rules, password_rules, validate_email, validate_password};
pub use form::{FormInput, LoginForm};
pub use validation::{ValidationResult, Validator, ValidatorChain};
