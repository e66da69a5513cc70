//! Per-field check functions
//!
//! Each check returns `Some(message)` on failure, `None` when the value
//! passes. Messages are user-facing and keyed by field id in the report.

use chrono::{DateTime, NaiveDate};
use shared_types::FieldValue;

/// Accepted textual date layouts, tried in order after RFC 3339
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

/// Whether a value counts as empty for presence checks
pub fn is_empty(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(s) => s.trim().is_empty(),
        FieldValue::Number(_) => false,
        FieldValue::Bool(_) => false,
    }
}

/// Presence check for required fields
///
/// Missing entries, empty strings, and unchecked checkboxes fail; any
/// other value passes.
pub fn check_required(value: Option<&FieldValue>) -> Option<String> {
    let failed = match value {
        None => true,
        Some(FieldValue::Text(s)) => s.trim().is_empty(),
        Some(FieldValue::Bool(b)) => !b,
        Some(FieldValue::Number(_)) => false,
    };
    failed.then(|| "This field is required".to_string())
}

/// The value must parse as a number
pub fn check_number(value: &FieldValue) -> Option<String> {
    let ok = match value {
        FieldValue::Number(_) => true,
        FieldValue::Text(s) => s.trim().parse::<f64>().is_ok(),
        FieldValue::Bool(_) => false,
    };
    (!ok).then(|| "Enter a valid number".to_string())
}

/// The value must parse as a date
pub fn check_date(value: &FieldValue) -> Option<String> {
    let ok = match value {
        FieldValue::Text(s) => parses_as_date(s.trim()),
        _ => false,
    };
    (!ok).then(|| "Enter a valid date".to_string())
}

/// The value must be one of the declared option values
pub fn check_membership(value: &FieldValue, options: &[String]) -> Option<String> {
    let ok = matches!(value, FieldValue::Text(s) if options.iter().any(|o| o == s));
    (!ok).then(|| "Select one of the available options".to_string())
}

/// The value must be a boolean or its textual spelling
pub fn check_checkbox(value: &FieldValue) -> Option<String> {
    let ok = match value {
        FieldValue::Bool(_) => true,
        FieldValue::Text(s) => matches!(s.as_str(), "true" | "false"),
        FieldValue::Number(_) => false,
    };
    (!ok).then(|| "Invalid value for a checkbox field".to_string())
}

fn parses_as_date(text: &str) -> bool {
    if DateTime::parse_from_rfc3339(text).is_ok() {
        return true;
    }
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(text, format).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_empty_variants() {
        assert!(check_required(None).is_some());
        assert!(check_required(Some(&FieldValue::Text("".to_string()))).is_some());
        assert!(check_required(Some(&FieldValue::Text("   ".to_string()))).is_some());
        assert!(check_required(Some(&FieldValue::Bool(false))).is_some());
    }

    #[test]
    fn test_required_accepts_any_nonempty() {
        assert!(check_required(Some(&FieldValue::Text("abc".to_string()))).is_none());
        assert!(check_required(Some(&FieldValue::Number(0.0))).is_none());
        assert!(check_required(Some(&FieldValue::Bool(true))).is_none());
    }

    #[test]
    fn test_number_parseability() {
        assert!(check_number(&FieldValue::Text("250000".to_string())).is_none());
        assert!(check_number(&FieldValue::Text("-1.5".to_string())).is_none());
        assert!(check_number(&FieldValue::Number(3.0)).is_none());
        assert!(check_number(&FieldValue::Text("12 000".to_string())).is_some());
        assert!(check_number(&FieldValue::Bool(true)).is_some());
    }

    #[test]
    fn test_date_formats() {
        assert!(check_date(&FieldValue::Text("2026-08-06".to_string())).is_none());
        assert!(check_date(&FieldValue::Text("06.08.2026".to_string())).is_none());
        assert!(check_date(&FieldValue::Text("08/06/2026".to_string())).is_none());
        assert!(check_date(&FieldValue::Text("2026-08-06T12:00:00+05:00".to_string())).is_none());
        assert!(check_date(&FieldValue::Text("next tuesday".to_string())).is_some());
        assert!(check_date(&FieldValue::Number(20260806.0)).is_some());
    }

    #[test]
    fn test_membership() {
        let options = vec!["yes".to_string(), "no".to_string()];
        assert!(check_membership(&FieldValue::Text("yes".to_string()), &options).is_none());
        assert!(check_membership(&FieldValue::Text("maybe".to_string()), &options).is_some());
    }

    #[test]
    fn test_checkbox_values() {
        assert!(check_checkbox(&FieldValue::Bool(true)).is_none());
        assert!(check_checkbox(&FieldValue::Text("false".to_string())).is_none());
        assert!(check_checkbox(&FieldValue::Text("yes".to_string())).is_some());
    }
}
