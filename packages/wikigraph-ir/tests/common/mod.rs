//! Common test utilities for wikigraph-ir
//!
//! Shared fixtures and assertions for integration tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use fixtures::*;
