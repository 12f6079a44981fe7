//! Graph Builder UseCase

use std::path::PathBuf;

use crate::features::graph_builder::domain::{GraphDocument, IngestSummary};
use crate::features::graph_builder::infrastructure::GraphBuilder;

/// Graph Builder UseCase Trait
pub trait GraphBuilderUseCase: Send + Sync {
    /// Ingest `inputs` in order and finalize the resulting graph
    fn build_graph(&self, inputs: &[PathBuf]) -> GraphBuildResult;
}

#[derive(Debug)]
pub struct GraphBuildResult {
    pub graph: GraphDocument,
    pub summary: IngestSummary,
}

/// Graph Builder UseCase Implementation
#[derive(Debug, Default)]
pub struct GraphBuilderUseCaseImpl;

impl GraphBuilderUseCaseImpl {
    pub fn new() -> Self {
        Self
    }
}

impl GraphBuilderUseCase for GraphBuilderUseCaseImpl {
    fn build_graph(&self, inputs: &[PathBuf]) -> GraphBuildResult {
        let mut builder = GraphBuilder::new();
        let summary = builder.ingest_files(inputs);
        GraphBuildResult {
            graph: builder.finalize(),
            summary,
        }
    }
}
