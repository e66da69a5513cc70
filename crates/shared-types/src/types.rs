//! Core data model shared across the workspace
//!
//! Templates are immutable blueprints: metadata, an ordered field list, and
//! a content body carrying `{{...}}` placeholder tokens. Values are the
//! per-session user input keyed by field id. Documents are persisted,
//! rendered instances of a template.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input control kind for a template field
///
/// The kind determines both the rendered form control and the shape of the
/// validation rule synthesized for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Date,
    Number,
    Select,
    Checkbox,
    Radio,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Textarea => write!(f, "textarea"),
            FieldType::Date => write!(f, "date"),
            FieldType::Number => write!(f, "number"),
            FieldType::Select => write!(f, "select"),
            FieldType::Checkbox => write!(f, "checkbox"),
            FieldType::Radio => write!(f, "radio"),
        }
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "textarea" => Ok(FieldType::Textarea),
            "date" => Ok(FieldType::Date),
            "number" => Ok(FieldType::Number),
            "select" => Ok(FieldType::Select),
            "checkbox" => Ok(FieldType::Checkbox),
            "radio" => Ok(FieldType::Radio),
            other => Err(format!("Unknown field type: {}", other)),
        }
    }
}

/// One choice in a select/radio field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One input slot in a template
///
/// The `id` doubles as the form key and the placeholder name inside the
/// template body, so it must be a legal placeholder identifier and unique
/// within its template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
}

impl Field {
    /// A required field with no options
    pub fn required(id: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type,
            required: true,
            options: Vec::new(),
        }
    }

    /// An optional field with no options
    pub fn optional(id: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type,
            required: false,
            options: Vec::new(),
        }
    }

    /// Attach the selectable options (select/radio fields)
    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    /// Whether `id` can appear inside a placeholder token
    pub fn is_valid_id(id: &str) -> bool {
        let mut chars = id.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

/// Structural problems in a template's field list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Duplicate field id: {0}")]
    DuplicateFieldId(String),

    #[error("Field id is not a legal placeholder identifier: {0}")]
    InvalidFieldId(String),
}

/// An immutable document blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<Field>,
    pub content: String,
}

impl Template {
    /// Look up a field by id
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Check the field-list invariants: ids are legal placeholder
    /// identifiers and unique within the template
    pub fn validate_structure(&self) -> Result<(), TemplateError> {
        let mut seen = std::collections::BTreeSet::new();
        for field in &self.fields {
            if !Field::is_valid_id(&field.id) {
                return Err(TemplateError::InvalidFieldId(field.id.clone()));
            }
            if !seen.insert(field.id.as_str()) {
                return Err(TemplateError::DuplicateFieldId(field.id.clone()));
            }
        }
        Ok(())
    }
}

/// A user-entered field value
///
/// Deserializes untagged from the wire, so JSON strings, numbers, and
/// booleans all map onto the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// The string substituted for a direct placeholder lookup
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }

    /// The value as entered text, if it is textual
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// The field-id to value mapping for one editing session
pub type Values = BTreeMap<String, FieldValue>;

/// A persisted, rendered instance of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub template_id: String,
    pub template_name: String,
    pub title: String,
    pub values: Values,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a document
///
/// The backend assigns ids and timestamps; the draft carries everything
/// the client knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    pub template_id: String,
    pub template_name: String,
    pub title: String,
    pub values: Values,
    pub content: String,
}

/// Payload for requesting a format conversion
///
/// The conversion itself happens upstream; the response is an opaque blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub template_id: String,
    pub values: Values,
    pub format: crate::ExportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn template_with_fields(fields: Vec<Field>) -> Template {
        Template {
            id: "t1".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            fields,
            content: String::new(),
        }
    }

    #[test]
    fn test_field_id_legality() {
        assert!(Field::is_valid_id("employer"));
        assert!(Field::is_valid_id("_private"));
        assert!(Field::is_valid_id("salary_2024"));
        assert!(!Field::is_valid_id(""));
        assert!(!Field::is_valid_id("1st"));
        assert!(!Field::is_valid_id("has space"));
        assert!(!Field::is_valid_id("dash-ed"));
    }

    #[test]
    fn test_duplicate_field_ids_rejected() {
        let template = template_with_fields(vec![
            Field::required("employer", "Employer", FieldType::Text),
            Field::required("employer", "Employer again", FieldType::Text),
        ]);
        assert_eq!(
            template.validate_structure(),
            Err(TemplateError::DuplicateFieldId("employer".to_string()))
        );
    }

    #[test]
    fn test_illegal_field_id_rejected() {
        let template = template_with_fields(vec![Field::required(
            "monthly rent",
            "Monthly rent",
            FieldType::Number,
        )]);
        assert_eq!(
            template.validate_structure(),
            Err(TemplateError::InvalidFieldId("monthly rent".to_string()))
        );
    }

    #[test]
    fn test_field_value_untagged_roundtrip() {
        let json = r#"{"employer":"ACME","salary":250000,"probation":true}"#;
        let values: Values = serde_json::from_str(json).unwrap();
        assert_eq!(
            values.get("employer"),
            Some(&FieldValue::Text("ACME".to_string()))
        );
        assert_eq!(values.get("salary"), Some(&FieldValue::Number(250000.0)));
        assert_eq!(values.get("probation"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_number_display_drops_integral_fraction() {
        assert_eq!(FieldValue::Number(250000.0).display(), "250000");
        assert_eq!(FieldValue::Number(0.5).display(), "0.5");
    }
}
