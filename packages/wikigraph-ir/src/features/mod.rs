//! Feature modules
//!
//! Leaf-first: value extraction → row normalization → graph builder →
//! sanitizer → materializer. Larger features follow the
//! domain / infrastructure / application split.

pub mod value_extraction;

pub mod row_normalization;

pub mod graph_builder;

pub mod sanitizer;

// Visualization multigraph (petgraph) over a finalized document
pub mod materialize;
