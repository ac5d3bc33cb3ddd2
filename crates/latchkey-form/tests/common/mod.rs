#![allow(dead_code)]

use latchkey_form::{Field, FormEvent, Intent, LoginForm, SubmitTrigger};

/// Types a value into a field: an input followed by a key release, the way a
/// host forwards keystrokes.
pub fn type_value(form: &mut LoginForm, field: Field, value: &str) {
    form.apply(FormEvent::Input {
        field,
        value: value.to_string(),
    });
    form.apply(FormEvent::KeyRelease { field });
}

pub fn blur(form: &mut LoginForm, field: Field) {
    form.apply(FormEvent::Blur { field });
}

pub fn submit(form: &mut LoginForm) -> Option<Intent> {
    form.apply(FormEvent::Submit(SubmitTrigger::Button))
}

/// A form filled with credentials that pass the gate but not the strength
/// rules.
pub fn filled_form() -> LoginForm {
    let mut form = LoginForm::new();
    type_value(&mut form, Field::Email, "test@example.com");
    type_value(&mut form, Field::Password, "password123");
    form
}

pub fn message(form: &LoginForm, field: Field) -> &str {
    &form.validation(field).message
}
