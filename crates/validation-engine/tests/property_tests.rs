//! Property-based tests for the validation schema synthesizer

use proptest::prelude::*;
use shared_types::{Field, FieldType, FieldValue, Template, Values};
use validation_engine::build_schema;

fn template_of(fields: Vec<Field>) -> Template {
    Template {
        id: "t".to_string(),
        title: "T".to_string(),
        description: String::new(),
        fields,
        content: String::new(),
    }
}

fn single_value(field_id: &str, value: FieldValue) -> Values {
    let mut values = Values::new();
    values.insert(field_id.to_string(), value);
    values
}

/// Strings with at least one non-whitespace character
fn nonempty_string() -> impl Strategy<Value = String> {
    "[ ]{0,3}[a-zA-Z0-9а-яА-Я!?.,-]{1,40}[ ]{0,3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Required-field presence
    // ============================================================

    #[test]
    fn required_field_accepts_any_nonempty_string(
        text in nonempty_string(),
        field_type in prop_oneof![
            Just(FieldType::Text),
            Just(FieldType::Textarea),
            Just(FieldType::Number),
            Just(FieldType::Date),
        ]
    ) {
        let template = template_of(vec![Field::required("f", "F", field_type)]);
        let schema = build_schema(&template).unwrap();
        let report = schema.validate(&single_value("f", FieldValue::Text(text)));
        prop_assert!(report.success);
    }

    #[test]
    fn required_field_rejects_missing_value(
        field_type in prop_oneof![
            Just(FieldType::Text),
            Just(FieldType::Number),
            Just(FieldType::Date),
            Just(FieldType::Checkbox),
        ]
    ) {
        let template = template_of(vec![Field::required("f", "F", field_type)]);
        let schema = build_schema(&template).unwrap();
        let report = schema.validate(&Values::new());
        prop_assert!(!report.success);
        prop_assert!(!report.errors["f"].is_empty());
    }

    #[test]
    fn required_field_rejects_whitespace_only(spaces in "[ \t]{0,10}") {
        let template = template_of(vec![Field::required("f", "F", FieldType::Text)]);
        let schema = build_schema(&template).unwrap();
        let report = schema.validate(&single_value("f", FieldValue::Text(spaces)));
        prop_assert!(!report.success);
    }

    // ============================================================
    // Optional-field parseability
    // ============================================================

    #[test]
    fn optional_number_accepts_numeric_strings(n in -1_000_000.0f64..1_000_000.0) {
        let template = template_of(vec![Field::optional("n", "N", FieldType::Number)]);
        let schema = build_schema(&template).unwrap();
        let report = schema.validate(&single_value("n", FieldValue::Text(n.to_string())));
        prop_assert!(report.success);
    }

    #[test]
    fn optional_number_rejects_alphabetic_strings(text in "[a-zA-Z]{1,20}") {
        let template = template_of(vec![Field::optional("n", "N", FieldType::Number)]);
        let schema = build_schema(&template).unwrap();
        let report = schema.validate(&single_value("n", FieldValue::Text(text.clone())));
        // "inf"/"NaN"-style spellings are legal f64 input; everything else fails
        let parses = text.trim().parse::<f64>().is_ok();
        prop_assert_eq!(report.success, parses);
    }

    #[test]
    fn optional_fields_ignore_absence(
        field_type in prop_oneof![
            Just(FieldType::Number),
            Just(FieldType::Date),
            Just(FieldType::Checkbox),
        ]
    ) {
        let template = template_of(vec![Field::optional("f", "F", field_type)]);
        let schema = build_schema(&template).unwrap();
        prop_assert!(schema.validate(&Values::new()).success);
    }

    #[test]
    fn optional_date_accepts_iso_dates(year in 1970i32..2100, month in 1u32..13, day in 1u32..29) {
        let template = template_of(vec![Field::optional("d", "D", FieldType::Date)]);
        let schema = build_schema(&template).unwrap();
        let text = format!("{:04}-{:02}-{:02}", year, month, day);
        prop_assert!(schema.validate(&single_value("d", FieldValue::Text(text))).success);
    }

    // ============================================================
    // Determinism
    // ============================================================

    #[test]
    fn validation_is_deterministic(text in ".{0,40}") {
        let template = template_of(vec![
            Field::required("a", "A", FieldType::Text),
            Field::optional("b", "B", FieldType::Number),
        ]);
        let schema = build_schema(&template).unwrap();
        let values = single_value("b", FieldValue::Text(text));
        prop_assert_eq!(schema.validate(&values), schema.validate(&values));
    }
}
