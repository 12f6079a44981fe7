//! Value Extraction
//!
//! Pulls scalar text out of input cells and recognizes Wikidata entity and
//! property URIs:
//!
//! - `http://www.wikidata.org/entity/Q42`          → `EntityId("Q42")`
//! - `http://www.wikidata.org/prop/direct/P31`     → `PropertyId("P31")`
//!
//! Both patterns are anchored at the end of the string, so a bare `Q42`, a
//! property URI passed as an entity, or free text never match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::models::{Cell, EntityId, PropertyId};

static ENTITY_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/entity/(Q\d+)$").expect("entity URI pattern is valid")
});

static PROPERTY_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/prop/direct/(P\d+)$").expect("property URI pattern is valid")
});

/// Text of a cell; absent and null cells read as the empty string
pub fn scalar_value(cell: Option<&Cell>) -> String {
    cell.map(|c| c.text().to_string()).unwrap_or_default()
}

/// Entity identifier captured from the cell's URI, if it is an entity URI
pub fn extract_entity_id(cell: Option<&Cell>) -> Option<EntityId> {
    capture(&ENTITY_URI, cell).map(EntityId::new)
}

/// Property identifier captured from the cell's URI, if it is a direct-property URI
pub fn extract_property_id(cell: Option<&Cell>) -> Option<PropertyId> {
    capture(&PROPERTY_URI, cell).map(PropertyId::new)
}

fn capture<'a>(pattern: &Regex, cell: Option<&'a Cell>) -> Option<&'a str> {
    let text = cell?.text();
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
