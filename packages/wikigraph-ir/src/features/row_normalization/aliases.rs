//! Column alias tables
//!
//! Query exports name their variables differently depending on who wrote the
//! query. Each logical role lists the column names it accepts, highest
//! priority first.

use super::domain::ColumnRule;
use crate::features::value_extraction::{extract_entity_id, extract_property_id};
use crate::shared::models::{Cell, EntityId, PropertyId};

/// Label extractor: the cell text, unless it is empty
pub fn non_empty_text(cell: Option<&Cell>) -> Option<String> {
    cell.map(Cell::text)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

pub const SUBJECT_ID: &[ColumnRule<EntityId>] = &[
    ColumnRule::new("item", extract_entity_id),
    ColumnRule::new("item1", extract_entity_id),
    ColumnRule::new("subject", extract_entity_id),
];

pub const SUBJECT_LABEL: &[ColumnRule<String>] = &[
    ColumnRule::new("itemLabel", non_empty_text),
    ColumnRule::new("item1Label", non_empty_text),
    ColumnRule::new("subjectLabel", non_empty_text),
];

pub const PROPERTY_ID: &[ColumnRule<PropertyId>] = &[
    ColumnRule::new("prop", extract_property_id),
    ColumnRule::new("p", extract_property_id),
];

pub const PROPERTY_LABEL: &[ColumnRule<String>] = &[
    ColumnRule::new("propLabel", non_empty_text),
    ColumnRule::new("pl_", non_empty_text),
];

pub const OBJECT_ID: &[ColumnRule<EntityId>] = &[
    ColumnRule::new("value", extract_entity_id),
    ColumnRule::new("item2", extract_entity_id),
    ColumnRule::new("o", extract_entity_id),
];

pub const OBJECT_LABEL: &[ColumnRule<String>] = &[
    ColumnRule::new("valueLabel", non_empty_text),
    ColumnRule::new("item2Label", non_empty_text),
    ColumnRule::new("ol_", non_empty_text),
];
