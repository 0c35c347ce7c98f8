use super::{FieldError, FormErrors};
use regex::Regex;
use std::sync::LazyLock;

// Literal patterns, covered by `patterns_compile`
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("email regex")
});

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ]{6,20}$").expect("phone regex"));

pub const PASSWORD_MIN_LENGTH: usize = 8;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    match value.is_empty() {
        true => None,
        false => Some(value.to_string()),
    }
}

pub fn required(errors: &mut FormErrors, field: &str, value: &str) -> bool {
    if is_blank(value) {
        errors.add(field, FieldError::Required);
        return false;
    }

    true
}

pub fn required_text(errors: &mut FormErrors, field: &str, value: &str, max_length: usize) {
    if required(errors, field, value) && value.trim().chars().count() > max_length {
        errors.add(field, FieldError::MaxLength(max_length));
    }
}

pub fn required_email(errors: &mut FormErrors, field: &str, value: &str) {
    if required(errors, field, value) {
        optional_email(errors, field, value);
    }
}

pub fn optional_email(errors: &mut FormErrors, field: &str, value: &str) {
    if !is_blank(value) && !EMAIL_REGEX.is_match(value.trim()) {
        errors.add(field, FieldError::InvalidEmail);
    }
}

pub fn optional_phone(errors: &mut FormErrors, field: &str, value: &str) {
    if !is_blank(value) && !PHONE_REGEX.is_match(value.trim()) {
        errors.add(field, FieldError::InvalidPhone);
    }
}

///
/// Password rules shared by registration, reset and change forms
///
pub fn new_password(
    errors: &mut FormErrors,
    field: &str,
    confirm_field: &str,
    password: &str,
    confirm_password: &str,
) {
    if required(errors, field, password) && password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.add(field, FieldError::MinLength(PASSWORD_MIN_LENGTH));
    }

    if required(errors, confirm_field, confirm_password) && password != confirm_password {
        errors.add(confirm_field, FieldError::PasswordMismatch);
    }
}
