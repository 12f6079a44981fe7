//! Row Normalization Domain Models

use crate::shared::models::{Cell, EntityId, PropertyId};

/// Extractor applied to one candidate column
pub type Extractor<T> = fn(Option<&Cell>) -> Option<T>;

/// One accepted column name for a logical role, with the extractor that reads it
pub struct ColumnRule<T> {
    pub column: &'static str,
    pub extract: Extractor<T>,
}

impl<T> ColumnRule<T> {
    pub const fn new(column: &'static str, extract: Extractor<T>) -> Self {
        Self { column, extract }
    }
}

impl<T> std::fmt::Debug for ColumnRule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnRule")
            .field("column", &self.column)
            .finish()
    }
}

/// A row reduced to the subject/property/object triple it describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub subject: EntityId,
    /// Empty when no label column was present
    pub subject_label: String,
    pub property_id: Option<PropertyId>,
    /// Falls back to the property id when no label column was present
    pub property_label: Option<String>,
    /// `None` when the object is a literal or otherwise not an entity
    pub object: Option<EntityId>,
    pub object_label: String,
}
