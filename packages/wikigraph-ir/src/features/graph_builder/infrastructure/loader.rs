// Document loader
//
// Reads one export and unwraps it into row records. Three shapes are
// accepted:
//   1. SPARQL JSON results: {"head": ..., "results": {"bindings": [...]}}
//   2. a bare array of rows
//   3. anything else, treated as a single row

use std::path::Path;

use crate::errors::LoadError;
use crate::shared::models::Value;

/// Read and parse `path`, returning its rows
pub fn load_rows(path: &Path) -> Result<Vec<Value>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Exports saved from spreadsheet tools may carry a byte-order mark
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let document: Value = serde_json::from_str(content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(unwrap_rows(document))
}

/// Extract the row list from a parsed document
pub fn unwrap_rows(document: Value) -> Vec<Value> {
    match document {
        Value::Object(mut obj) => {
            let has_bindings = obj
                .get("results")
                .and_then(|results| results.get("bindings"))
                .map_or(false, Value::is_array);
            if has_bindings {
                if let Some(Value::Object(mut results)) = obj.remove("results") {
                    if let Some(Value::Array(rows)) = results.remove("bindings") {
                        return rows;
                    }
                }
            }
            vec![Value::Object(obj)]
        }
        Value::Array(rows) => rows,
        other => vec![other],
    }
}
