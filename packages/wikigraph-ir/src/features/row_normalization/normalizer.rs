//! Row normalizer
//!
//! Resolves each logical role against its alias table. Columns are inspected
//! lazily in priority order; the first column whose extractor succeeds wins.
//! Any cell value has a text form, so only a record that is not an object is
//! rejected.

use super::aliases;
use super::domain::{ColumnRule, NormalizedRow};
use crate::errors::RowError;
use crate::shared::models::{json_kind, Cell, Row, Value};

/// Normalize one input record.
///
/// Returns `Ok(None)` when no subject entity can be resolved; such rows are
/// skipped without being treated as errors.
pub fn normalize_row(record: &Value) -> Result<Option<NormalizedRow>, RowError> {
    match record {
        Value::Object(row) => Ok(normalize_fields(row)),
        other => Err(RowError::NotAnObject {
            found: json_kind(other),
        }),
    }
}

/// Normalize a record already known to be an object
pub fn normalize_fields(row: &Row) -> Option<NormalizedRow> {
    let subject = resolve(row, aliases::SUBJECT_ID)?;
    let subject_label = resolve(row, aliases::SUBJECT_LABEL).unwrap_or_default();

    let property_id = resolve(row, aliases::PROPERTY_ID);
    let property_label = resolve(row, aliases::PROPERTY_LABEL)
        .or_else(|| property_id.as_ref().map(|pid| pid.to_string()));

    let object = resolve(row, aliases::OBJECT_ID);
    let object_label = match object {
        Some(_) => resolve(row, aliases::OBJECT_LABEL).unwrap_or_default(),
        None => String::new(),
    };

    Some(NormalizedRow {
        subject,
        subject_label,
        property_id,
        property_label,
        object,
        object_label,
    })
}

/// First successful extraction across the role's columns
fn resolve<T>(row: &Row, rules: &[ColumnRule<T>]) -> Option<T> {
    rules.iter().find_map(|rule| {
        let cell = Cell::lookup(row, rule.column);
        (rule.extract)(Some(&cell))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const ENTITY: &str = "http://www.wikidata.org/entity/";
    const PROP: &str = "http://www.wikidata.org/prop/direct/";

    fn uri(base: &str, id: &str) -> Value {
        json!({"type": "uri", "value": format!("{base}{id}")})
    }

    fn literal(text: &str) -> Value {
        json!({"type": "literal", "xml:lang": "en", "value": text})
    }

    #[test]
    fn test_full_row() {
        let row = json!({
            "item": uri(ENTITY, "Q1"),
            "itemLabel": literal("Earth"),
            "prop": uri(PROP, "P31"),
            "propLabel": literal("instance of"),
            "value": uri(ENTITY, "Q2"),
            "valueLabel": literal("Planet"),
        });

        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.subject.as_str(), "Q1");
        assert_eq!(normalized.subject_label, "Earth");
        assert_eq!(normalized.property_id.unwrap().as_str(), "P31");
        assert_eq!(normalized.property_label.as_deref(), Some("instance of"));
        assert_eq!(normalized.object.unwrap().as_str(), "Q2");
        assert_eq!(normalized.object_label, "Planet");
    }

    #[test]
    fn test_alternate_column_names() {
        let row = json!({
            "item1": format!("{ENTITY}Q10"),
            "item1Label": "Alpha",
            "p": format!("{PROP}P279"),
            "pl_": "subclass of",
            "item2": format!("{ENTITY}Q20"),
            "item2Label": "Beta",
        });

        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.subject.as_str(), "Q10");
        assert_eq!(normalized.subject_label, "Alpha");
        assert_eq!(normalized.property_id.unwrap().as_str(), "P279");
        assert_eq!(normalized.property_label.as_deref(), Some("subclass of"));
        assert_eq!(normalized.object.unwrap().as_str(), "Q20");
        assert_eq!(normalized.object_label, "Beta");
    }

    #[test]
    fn test_subject_alias_priority() {
        // `item` wins over `subject` when both resolve
        let row = json!({
            "subject": uri(ENTITY, "Q3"),
            "item": uri(ENTITY, "Q4"),
        });
        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.subject.as_str(), "Q4");

        // ... but a non-entity `item` falls through to the next alias
        let row = json!({
            "item": literal("not a uri"),
            "subject": uri(ENTITY, "Q3"),
        });
        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.subject.as_str(), "Q3");
    }

    #[test]
    fn test_empty_label_falls_through() {
        let row = json!({
            "item": uri(ENTITY, "Q1"),
            "itemLabel": literal(""),
            "subjectLabel": literal("Earth"),
        });
        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.subject_label, "Earth");
    }

    #[test]
    fn test_property_label_falls_back_to_pid() {
        let row = json!({
            "item": uri(ENTITY, "Q1"),
            "prop": uri(PROP, "P31"),
            "propLabel": literal(""),
            "value": uri(ENTITY, "Q2"),
        });
        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.property_label.as_deref(), Some("P31"));
    }

    #[test]
    fn test_no_property_leaves_label_empty() {
        let row = json!({
            "item": uri(ENTITY, "Q1"),
            "value": uri(ENTITY, "Q2"),
        });
        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.property_id, None);
        assert_eq!(normalized.property_label, None);
    }

    #[test]
    fn test_label_without_pid_is_kept() {
        let row = json!({
            "item": uri(ENTITY, "Q1"),
            "propLabel": literal("related to"),
            "value": uri(ENTITY, "Q2"),
        });
        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.property_id, None);
        assert_eq!(normalized.property_label.as_deref(), Some("related to"));
    }

    #[test]
    fn test_missing_subject_is_skipped() {
        let row = json!({
            "value": uri(ENTITY, "Q2"),
            "valueLabel": literal("Planet"),
        });
        assert_eq!(normalize_row(&row).unwrap(), None);
    }

    #[test]
    fn test_literal_object_has_no_entity() {
        let row = json!({
            "item": uri(ENTITY, "Q1"),
            "itemLabel": literal("Earth"),
            "prop": uri(PROP, "P2067"),
            "value": {"type": "literal", "datatype": "xsd:decimal", "value": "5.97e24"},
        });
        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.object, None);
        assert_eq!(normalized.object_label, "");
    }

    #[test]
    fn test_non_object_row_is_an_error() {
        let err = normalize_row(&json!(["Q1", "Q2"])).unwrap_err();
        assert_eq!(err, RowError::NotAnObject { found: "array" });
    }

    #[test]
    fn test_array_label_is_kept_as_text() {
        let row = json!({
            "item": format!("{ENTITY}Q1"),
            "itemLabel": ["Earth", "Terra"],
            "value": format!("{ENTITY}Q2"),
        });
        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.subject_label, r#"["Earth","Terra"]"#);
        assert_eq!(normalized.object.unwrap().as_str(), "Q2");
    }

    #[test]
    fn test_array_id_falls_through_to_next_alias() {
        let row = json!({
            "item": ["junk"],
            "item1": format!("{ENTITY}Q1"),
            "item2": format!("{ENTITY}Q2"),
        });
        let normalized = normalize_row(&row).unwrap().unwrap();
        assert_eq!(normalized.subject.as_str(), "Q1");
        assert_eq!(normalized.object.unwrap().as_str(), "Q2");

        // A wrapped composite never matches an id pattern either
        let row = json!({
            "item": {"value": [format!("{ENTITY}Q9")]},
            "subject": uri(ENTITY, "Q3"),
        });
        assert_eq!(normalize_row(&row).unwrap().unwrap().subject.as_str(), "Q3");
    }
}
