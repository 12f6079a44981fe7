//! Shared module - Common types used by every feature
//!
//! Input cells, rows and the typed identifiers extracted from them.

pub mod models;

// Re-exports for convenience
pub use models::*;
