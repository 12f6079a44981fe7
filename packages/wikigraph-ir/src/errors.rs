//! Error types for wikigraph-ir
//!
//! Row and file failures are recoverable: the builder records them in its
//! ingest summary and moves on.

use std::path::PathBuf;
use thiserror::Error;

/// A single input record could not be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The record is not a JSON object
    #[error("row is a JSON {found}, expected an object")]
    NotAnObject { found: &'static str },
}

/// A whole input document could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
