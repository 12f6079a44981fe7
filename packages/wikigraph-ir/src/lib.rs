/*
 * Wikigraph IR - SPARQL export integration core
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Cell, Row, EntityId, PropertyId)
 * - features/    : value extraction → row normalization → graph builder
 *                  → sanitizer → materializer
 * - config/      : Explicit run configuration (YAML loadable)
 *
 * Data flow:
 *   export files → loader → normalizer (per row) → GraphBuilder
 *                → finalize() → GraphDocument → VisualizationGraph / writers
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, IntegrationConfig};
pub use errors::{LoadError, RowError};
pub use features::graph_builder::{
    GraphBuilder, GraphDocument, GraphEdge, GraphNode, IngestSummary, RowOutcome,
};
pub use features::materialize::{AttrMap, NodeTableRow, VisualizationGraph};
pub use features::row_normalization::{normalize_row, NormalizedRow};
pub use features::sanitizer::{to_serializable, AttrKind, AttrValue};
pub use features::value_extraction::{extract_entity_id, extract_property_id, scalar_value};
pub use shared::models::{Cell, EntityId, PropertyId, Row};
