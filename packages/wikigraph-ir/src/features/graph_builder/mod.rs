// Graph Builder - SPARQL exports → deduplicated property graph
//
// ## Architecture
// - Domain: Pure models (Node, GraphNode, GraphEdge, GraphDocument, ingest outcomes)
// - Infrastructure: document loader and the stateful GraphBuilder
// - Application: one-call use case (ingest files, then finalize)
//
// ## Lifecycle
// new() → ensure_node/add_edge via ingest*() → finalize() → GraphDocument

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{GraphBuildResult, GraphBuilderUseCase, GraphBuilderUseCaseImpl};

// Re-exports
pub use domain::{
    BatchSummary, EdgeKey, FileOutcome, FileReport, GraphDocument, GraphEdge, GraphNode,
    GraphStats, IngestSummary, Node, PropertyCount, RowFailure, RowOutcome,
};

pub use infrastructure::{load_rows, unwrap_rows, GraphBuilder};
