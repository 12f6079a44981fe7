//! Test fixture generators
//!
//! SPARQL JSON result rows and export files in the shapes the Wikidata query
//! service produces.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

pub const ENTITY: &str = "http://www.wikidata.org/entity/";
pub const PROP: &str = "http://www.wikidata.org/prop/direct/";

/// Wrapped URI cell for an entity id
pub fn entity(id: &str) -> Value {
    json!({"type": "uri", "value": format!("{ENTITY}{id}")})
}

/// Wrapped URI cell for a direct property id
pub fn property(id: &str) -> Value {
    json!({"type": "uri", "value": format!("{PROP}{id}")})
}

/// Wrapped language-tagged literal
pub fn literal(text: &str) -> Value {
    json!({"type": "literal", "xml:lang": "en", "value": text})
}

/// Row using the `item/prop/value` naming convention
pub fn fixture_row(
    subject: &str,
    subject_label: &str,
    prop: &str,
    prop_label: &str,
    object: &str,
    object_label: &str,
) -> Value {
    json!({
        "item": entity(subject),
        "itemLabel": literal(subject_label),
        "prop": property(prop),
        "propLabel": literal(prop_label),
        "value": entity(object),
        "valueLabel": literal(object_label),
    })
}

/// The Earth → instance of → Planet row
pub fn fixture_earth_row() -> Value {
    fixture_row("Q1", "Earth", "P31", "instance of", "Q2", "Planet")
}

/// Wrap rows in a query-service results document
pub fn fixture_sparql_results(rows: Vec<Value>) -> Value {
    json!({
        "head": {"vars": ["item", "itemLabel", "prop", "propLabel", "value", "valueLabel"]},
        "results": {"bindings": rows},
    })
}

/// Write `document` as `<dir>/<name>` and return the path
pub fn write_export(dir: &Path, name: &str, document: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(document).unwrap()).unwrap();
    path
}

/// Write raw text as `<dir>/<name>` and return the path
pub fn write_raw(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
