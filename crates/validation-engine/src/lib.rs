//! Field-driven validation
//!
//! `build_schema` derives a validation schema from a template's field list;
//! `Schema::validate` checks one value map against it and reports failures
//! per field. Validation never throws: failures come back as data so the
//! form layer can attach messages to individual fields.
//!
//! A required field is satisfied by any non-empty entry regardless of its
//! declared type; type-specific parseability applies to optional fields
//! with a value present. Callers relying on a parseable number in a
//! required field must parse the rendered value themselves.

pub mod rules;

use std::collections::BTreeMap;

use shared_types::{Field, FieldType, Template, TemplateError, Values};
use thiserror::Error;

/// Schema construction failures
///
/// Malformed field lists (duplicate or illegal ids) surface here rather
/// than at render time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error(transparent)]
    InvalidTemplate(#[from] TemplateError),
}

/// Per-field rule kind derived from the field type
#[derive(Debug, Clone, PartialEq)]
enum RuleKind {
    Text,
    Number,
    Date,
    OneOf(Vec<String>),
    Checkbox,
}

impl RuleKind {
    fn for_field(field: &Field) -> Self {
        match field.field_type {
            FieldType::Text | FieldType::Textarea => RuleKind::Text,
            FieldType::Number => RuleKind::Number,
            FieldType::Date => RuleKind::Date,
            FieldType::Select | FieldType::Radio => {
                RuleKind::OneOf(field.options.iter().map(|o| o.value.clone()).collect())
            }
            FieldType::Checkbox => RuleKind::Checkbox,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct FieldRule {
    field_id: String,
    required: bool,
    kind: RuleKind,
}

/// A validation schema synthesized from one template
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

/// Outcome of validating a value map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub success: bool,
    /// One message per failing field, keyed by field id
    pub errors: BTreeMap<String, String>,
}

impl ValidationReport {
    fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
        }
    }
}

/// Derive a validation schema from a template
pub fn build_schema(template: &Template) -> Result<Schema, SchemaError> {
    template.validate_structure()?;

    let rules = template
        .fields
        .iter()
        .map(|field| FieldRule {
            field_id: field.id.clone(),
            required: field.required,
            kind: RuleKind::for_field(field),
        })
        .collect();

    Ok(Schema { rules })
}

impl Schema {
    /// Validate a value map against the schema
    ///
    /// Fields validate independently; one failure never blocks another
    /// field's check. Pure: identical inputs produce identical reports.
    pub fn validate(&self, values: &Values) -> ValidationReport {
        let mut errors = BTreeMap::new();

        for rule in &self.rules {
            let value = values.get(&rule.field_id);

            if rule.required {
                // A required field passes on any non-empty entry; the
                // declared type is not consulted.
                if let Some(message) = rules::check_required(value) {
                    errors.insert(rule.field_id.clone(), message);
                }
                continue;
            }

            // Optional fields are checked only when a non-empty value is
            // present.
            let Some(value) = value else { continue };
            if rules::is_empty(value) {
                continue;
            }
            let failure = match &rule.kind {
                RuleKind::Text => None,
                RuleKind::Number => rules::check_number(value),
                RuleKind::Date => rules::check_date(value),
                RuleKind::OneOf(options) => rules::check_membership(value, options),
                RuleKind::Checkbox => rules::check_checkbox(value),
            };
            if let Some(message) = failure {
                errors.insert(rule.field_id.clone(), message);
            }
        }

        ValidationReport::from_errors(errors)
    }
}
