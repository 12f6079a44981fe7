//! Shared models

mod cell;
mod identifiers;

pub use cell::{Cell, Row};
pub(crate) use cell::json_kind;
pub use identifiers::{EntityId, PropertyId};

// Re-export serde_json::Value for convenience (rows and attributes are JSON)
pub use serde_json::Value;
