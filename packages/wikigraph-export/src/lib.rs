//! Wikigraph Export - writers and CLI for the integrated graph
//!
//! Takes the finalized [`GraphDocument`](wikigraph_ir::GraphDocument) and
//! writes it as:
//!
//! - `<prefix>.json`: graph document (nodes, edges)
//! - `<prefix>.gexf`: visualization graph with typed attributes
//! - `<prefix>_nodes.csv` / `<prefix>_edges.csv`: tabular views
//!
//! Every artifact is written atomically.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wikigraph_export::{discover_inputs, export_graph, ExportFormat};
//! use wikigraph_ir::features::graph_builder::{GraphBuilderUseCase, GraphBuilderUseCaseImpl};
//! use wikigraph_ir::IntegrationConfig;
//!
//! let config = IntegrationConfig::new().with_input_dir("data");
//! let inputs = discover_inputs(&config)?;
//! let result = GraphBuilderUseCaseImpl::new().build_graph(&inputs);
//! export_graph(&result.graph, &ExportFormat::ALL, &config)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::export_graph;
pub use domain::{ExportFormat, ExportInput, GraphExporter};
pub use error::{ErrorKind, ExportError, Result};
pub use infrastructure::{
    discover_inputs, exporter_for, write_atomic, CsvExporter, GexfError, GexfExporter,
    JsonExporter,
};
