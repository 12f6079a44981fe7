//! Typed identifiers extracted from Wikidata-style URIs
//!
//! `EntityId` keys a graph node (`Q42`), `PropertyId` names a relation (`P31`).
//! Both are only constructed by the value extractor, so a value of either type
//! always holds a token that matched its URI pattern.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Entity identifier (EID), e.g. `Q42`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Property identifier (PID), e.g. `P31`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PropertyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PropertyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
