//! Attribute Sanitizer
//!
//! Formats such as GEXF only store flat scalar attributes. `to_serializable`
//! maps any JSON value onto one:
//!
//! | input             | output                         |
//! |-------------------|--------------------------------|
//! | null              | `Text("")`                     |
//! | string            | `Text`                         |
//! | integer / float   | `Int` / `Float`                |
//! | boolean           | `Bool`                         |
//! | array / object    | `Text` holding compact JSON    |

use serde::Serialize;
use std::fmt;

use crate::shared::models::Value;

/// Serialization-safe scalar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl AttrValue {
    /// Coerce to text (used by the degraded export path)
    pub fn into_text(self) -> AttrValue {
        match self {
            AttrValue::Text(s) => AttrValue::Text(s),
            other => AttrValue::Text(other.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Type name as used in attribute declarations
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Text(_) => AttrKind::Text,
            AttrValue::Int(_) => AttrKind::Int,
            AttrValue::Float(_) => AttrKind::Float,
            AttrValue::Bool(_) => AttrKind::Bool,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Float(x) => write!(f, "{x}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

/// Scalar type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    Text,
    Int,
    Float,
    Bool,
}

/// Convert any JSON value into a serialization-safe scalar
pub fn to_serializable(value: &Value) -> AttrValue {
    match value {
        Value::Null => AttrValue::Text(String::new()),
        Value::String(s) => AttrValue::Text(s.clone()),
        Value::Bool(b) => AttrValue::Bool(*b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => AttrValue::Int(i),
            (None, Some(x)) => AttrValue::Float(x),
            (None, None) => AttrValue::Text(n.to_string()),
        },
        Value::Array(_) | Value::Object(_) => match serde_json::to_string(value) {
            Ok(json) => AttrValue::Text(json),
            Err(_) => AttrValue::Text(value.to_string()),
        },
    }
}
