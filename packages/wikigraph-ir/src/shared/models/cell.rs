//! Input cells
//!
//! A SPARQL JSON export stores each binding either as a bare scalar or as a
//! wrapper object (`{"type": "uri", "value": "..."}`). `Cell` folds both into a
//! closed variant so extraction can match exhaustively.

use serde_json::{Map, Value};

/// One input record: column name → raw JSON cell
pub type Row = Map<String, Value>;

/// Loosely-typed input cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Null,
    /// Bare value in its text form; arrays and objects as compact JSON
    Scalar(String),
    /// Wrapper object; holds the text of its `value` field
    Wrapped(String),
}

impl Cell {
    /// Interpret a raw JSON cell. Every value has a text form, so this never fails.
    pub fn parse(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Object(obj) => match obj.get("value") {
                None | Some(Value::Null) => Cell::Wrapped(String::new()),
                Some(inner) => Cell::Wrapped(scalar_text(inner)),
            },
            other => Cell::Scalar(scalar_text(other)),
        }
    }

    /// Look up `column` in `row`; a missing column reads as `Null`.
    pub fn lookup(row: &Row, column: &str) -> Self {
        row.get(column).map_or(Cell::Null, Self::parse)
    }

    /// Text carried by the cell (empty for `Null`)
    pub fn text(&self) -> &str {
        match self {
            Cell::Null => "",
            Cell::Scalar(s) | Cell::Wrapped(s) => s,
        }
    }
}

/// Text form of a non-wrapper value. Booleans are capitalized the way the
/// query tooling prints them (`True` / `False`).
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// JSON type name, used in error messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
