use std::collections::BTreeMap;

use crate::form::{FieldKind, FormField};
use crate::i18n::{Fallback, Translate};

/// Field name to error message, an empty message meaning the field is valid.
pub type ErrorMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    pub fn message(&self, field: &FormField, t: &dyn Translate) -> String {
        match (self, field.name) {
            (Self::Required, "name") => t.translate("form.enter_name", "Enter your name"),
            (Self::Required, "email") => {
                t.translate("form.enter_email", "Enter your email address")
            }
            (Self::Required, name) => t
                .translate("form.enter_field", "Please enter {{field}}")
                .replace("{{field}}", name),
            (Self::InvalidEmail, _) => t.translate("form.invalid_email", "Invalid email address"),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email_address::EmailAddress::parse_with_options(
        email,
        email_address::Options::default().with_required_tld(),
    )
    .is_ok()
}

/// Checks a single field. Optional empty fields are always valid.
pub fn check_field(field: &FormField) -> Option<FieldError> {
    let value = field.value.trim();
    if value.is_empty() {
        return field.required.then_some(FieldError::Required);
    }
    if field.kind == FieldKind::Email && !is_valid_email(value) {
        return Some(FieldError::InvalidEmail);
    }
    None
}

/// Validates every field, with untranslated messages.
pub fn validate(fields: &[FormField]) -> ErrorMap {
    validate_with(fields, &Fallback)
}

/// Validates every field. The result has one entry per field.
pub fn validate_with(fields: &[FormField], t: &dyn Translate) -> ErrorMap {
    fields
        .iter()
        .map(|field| {
            let message = check_field(field)
                .map(|e| e.message(field, t))
                .unwrap_or_default();
            (field.name.to_string(), message)
        })
        .collect()
}

/// Whether a validation result blocks submission.
pub fn has_errors(errors: &ErrorMap) -> bool {
    errors.values().any(|e| !e.is_empty())
}
