// Graph Builder - Main Entry Point
//
// Accumulates normalized rows from any number of exports into one
// deduplicated node/edge model:
// - Nodes keyed by entity id, first-seen order, label sets merged
// - Edges deduplicated by (source, target, property id, property label),
//   first occurrence wins, insertion order kept
// - Per-file and per-row failures are recorded and logged, never fatal
//
// `finalize` consumes the builder, so a graph is finalized exactly once and
// cannot be mutated afterwards.

use ahash::{AHashMap, AHashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::loader::load_rows;
use crate::errors::RowError;
use crate::features::graph_builder::domain::{
    BatchSummary, EdgeKey, FileOutcome, FileReport, GraphDocument, GraphEdge, IngestSummary, Node,
    PropertyCount, RowOutcome,
};
use crate::features::row_normalization::normalize_row;
use crate::shared::models::{EntityId, PropertyId, Value};

/// Stateful graph accumulator
///
/// ## Usage
/// ```text
/// let mut builder = GraphBuilder::new();
/// let summary = builder.ingest_files(&paths);
/// let graph = builder.finalize();
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Nodes in first-seen order
    nodes: Vec<Node>,
    /// Entity id → position in `nodes`
    node_index: AHashMap<EntityId, usize>,
    /// Edges in insertion order
    edges: Vec<GraphEdge>,
    edge_seen: AHashSet<EdgeKey>,
    /// (property id, property label) → edge count
    property_counts: AHashMap<(String, String), usize>,
}

impl GraphBuilder {
    /// Create new GraphBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for `id`, recording `label` if non-empty
    pub fn ensure_node(&mut self, id: &EntityId, label: &str) -> &Node {
        let index = match self.node_index.get(id) {
            Some(&index) => index,
            None => {
                let index = self.nodes.len();
                self.nodes.push(Node::new(id.clone()));
                self.node_index.insert(id.clone(), index);
                index
            }
        };
        let node = &mut self.nodes[index];
        node.observe_label(label);
        node
    }

    /// Append an edge unless an identical one was already seen.
    ///
    /// Both endpoints must already exist as nodes; an edge with an unknown
    /// endpoint is refused. Returns whether the edge was added.
    pub fn add_edge(
        &mut self,
        source: &EntityId,
        target: &EntityId,
        property_id: Option<PropertyId>,
        property_label: Option<String>,
    ) -> bool {
        if !self.node_index.contains_key(source) || !self.node_index.contains_key(target) {
            warn!("Refusing edge {} -> {}: endpoint not ensured", source, target);
            return false;
        }

        let key = EdgeKey::new(
            source,
            target,
            property_id.as_ref(),
            property_label.as_deref(),
        );
        if !self.edge_seen.insert(key) {
            return false;
        }

        let counter = (
            property_id
                .as_ref()
                .map(|p| p.to_string())
                .unwrap_or_default(),
            property_label.clone().unwrap_or_default(),
        );
        *self.property_counts.entry(counter).or_insert(0) += 1;

        self.edges.push(GraphEdge {
            source: source.clone(),
            target: target.clone(),
            property_id,
            property_label,
        });
        true
    }

    /// Normalize one record and apply it.
    ///
    /// The row is fully normalized before anything is mutated, so a row that
    /// fails contributes nothing.
    pub fn ingest_row(&mut self, record: &Value) -> Result<RowOutcome, RowError> {
        let Some(row) = normalize_row(record)? else {
            return Ok(RowOutcome::NoSubject);
        };

        self.ensure_node(&row.subject, &row.subject_label);

        let Some(object) = row.object else {
            return Ok(RowOutcome::NodeOnly);
        };
        self.ensure_node(&object, &row.object_label);
        let added = self.add_edge(&row.subject, &object, row.property_id, row.property_label);
        Ok(RowOutcome::Edge { added })
    }

    /// Ingest every row of one document; `source` names it in log output
    pub fn ingest<'a, I>(&mut self, source: &str, rows: I) -> BatchSummary
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut batch = BatchSummary::default();
        for (index, record) in rows.into_iter().enumerate() {
            let outcome = self.ingest_row(record);
            if let Err(err) = &outcome {
                warn!("Skipping malformed row {} in {}: {}", index, source, err);
            }
            batch.record(index, outcome);
        }
        batch
    }

    /// Ingest an already-parsed export (any of the accepted document shapes)
    pub fn ingest_document(&mut self, source: &str, document: Value) -> BatchSummary {
        let rows = super::loader::unwrap_rows(document);
        self.ingest(source, &rows)
    }

    /// Load and ingest each file in order. Unreadable or unparseable files are
    /// logged and skipped.
    pub fn ingest_files<P: AsRef<Path>>(&mut self, files: &[P]) -> IngestSummary {
        let mut summary = IngestSummary::default();

        for path in files {
            let path = path.as_ref();
            let source = display_name(path);

            let outcome = match load_rows(path) {
                Ok(rows) => {
                    let batch = self.ingest(&source, &rows);
                    debug!(
                        "Ingested {}: {} rows, {} new edges, {} failed",
                        source,
                        batch.rows,
                        batch.edges_added,
                        batch.rows_failed()
                    );
                    FileOutcome::Ingested(batch)
                }
                Err(err) => {
                    warn!("Could not read {}: {}", source, err);
                    FileOutcome::Skipped(err)
                }
            };

            summary.reports.push(FileReport {
                source: PathBuf::from(path),
                outcome,
            });
        }

        info!(
            "Ingested {} files ({} skipped): {} nodes, {} edges",
            summary.files_ingested(),
            summary.files_skipped(),
            self.nodes.len(),
            self.edges.len()
        );
        summary
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    /// Edge counts per (property id, property label); absent parts are empty strings
    pub fn property_counts(&self) -> &AHashMap<(String, String), usize> {
        &self.property_counts
    }

    /// Choose canonical labels and freeze the graph
    pub fn finalize(self) -> GraphDocument {
        let nodes = self.nodes.into_iter().map(Node::finalize).collect();
        let counts = self
            .property_counts
            .into_iter()
            .map(|((property_id, property_label), edges)| PropertyCount {
                property_id,
                property_label,
                edges,
            })
            .collect();
        GraphDocument::new(nodes, self.edges, counts)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================
// Tests
// ============================================================
