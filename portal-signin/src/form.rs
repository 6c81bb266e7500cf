use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use crate::i18n::Translate;
use crate::validate::ErrorMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Text,
}

/// Static declaration of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub kind: FieldKind,
    pub name: &'static str,
    pub label_key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
}

pub const SIGNIN_FIELDS: &[FieldSchema] = &[FieldSchema {
    kind: FieldKind::Email,
    name: "email",
    label_key: "input_field.email",
    label: "Email",
    placeholder: "jamie@example.com",
    required: true,
}];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("form has no field")]
    Empty,
    #[error("field #{0} has no name")]
    MissingName(usize),
    #[error("field name '{0}' is declared twice")]
    DuplicateName(&'static str),
}

pub fn check_schema(schema: &[FieldSchema]) -> Result<(), SchemaError> {
    if schema.is_empty() {
        return Err(SchemaError::Empty);
    }
    let mut names = HashSet::new();
    for (i, field) in schema.iter().enumerate() {
        if field.name.is_empty() {
            return Err(SchemaError::MissingName(i));
        }
        if !names.insert(field.name) {
            return Err(SchemaError::DuplicateName(field.name));
        }
    }
    Ok(())
}

/// A field as handed to the input control, rebuilt from the form state on
/// every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub kind: FieldKind,
    pub name: &'static str,
    pub value: String,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    schema: &'static [FieldSchema],
    values: BTreeMap<&'static str, String>,
    errors: ErrorMap,
    /// Set by the first validation pass, until then `errors` is empty.
    validated: bool,
}

impl FormState {
    pub fn new(schema: &'static [FieldSchema]) -> Result<Self, SchemaError> {
        check_schema(schema)?;
        Ok(Self {
            schema,
            values: schema
                .iter()
                .map(|field| (field.name, String::new()))
                .collect(),
            errors: ErrorMap::new(),
            validated: false,
        })
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// Whether the last validation pass found a problem.
    pub fn has_errors(&self) -> bool {
        crate::validate::has_errors(&self.errors)
    }

    /// Fields in declaration order with their current value and error.
    pub fn fields(&self, t: &dyn Translate) -> Vec<FormField> {
        self.schema
            .iter()
            .map(|field| FormField {
                kind: field.kind,
                name: field.name,
                value: self.value(field.name).to_string(),
                label: t.translate(field.label_key, field.label),
                placeholder: field.placeholder.to_string(),
                required: field.required,
                error_message: self.errors.get(field.name).cloned().unwrap_or_default(),
            })
            .collect()
    }

    /// Updates a single value. Errors are left as they are until the next
    /// validation pass.
    pub fn on_field_change(&mut self, name: &str, value: String) {
        match self.values.get_mut(name) {
            Some(v) => *v = value,
            None => tracing::warn!("change of unknown field '{}' ignored", name),
        }
    }

    pub fn set_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
        self.validated = true;
    }
}
