// Graph Builder Domain Models
//
// Pure domain models: accumulating nodes, finalized nodes, edges and the
// immutable GraphDocument handed to exporters.

use ahash::{AHashMap, AHashSet};
use serde::Serialize;

use crate::shared::models::{EntityId, PropertyId};

pub mod summary;

pub use summary::{BatchSummary, FileOutcome, FileReport, IngestSummary, RowFailure, RowOutcome};

// ============================================================
// Accumulating Node
// ============================================================

/// Node while the graph is still being built
///
/// Labels are a set: observing the same label twice is a no-op.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: EntityId,
    labels: AHashSet<String>,
}

impl Node {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            labels: AHashSet::new(),
        }
    }

    /// Record an observed label; empty labels are ignored
    pub fn observe_label(&mut self, label: &str) {
        if !label.is_empty() && !self.labels.contains(label) {
            self.labels.insert(label.to_string());
        }
    }

    pub fn labels(&self) -> &AHashSet<String> {
        &self.labels
    }

    /// Reduce to the canonical form: smallest label wins, all labels sorted
    pub fn finalize(self) -> GraphNode {
        let mut labels: Vec<String> = self.labels.into_iter().collect();
        labels.sort();
        GraphNode {
            id: self.id,
            label: labels.first().cloned().unwrap_or_default(),
            labels,
        }
    }
}

// ============================================================
// Graph Node
// ============================================================

/// Finalized node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: EntityId,
    /// Canonical label (lexicographically smallest observed label, or empty)
    pub label: String,
    /// Every distinct observed label, sorted
    pub labels: Vec<String>,
}

// ============================================================
// Graph Edge
// ============================================================

/// Directed relation between two entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: EntityId,
    pub target: EntityId,
    pub property_id: Option<PropertyId>,
    pub property_label: Option<String>,
}

impl GraphEdge {
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(
            &self.source,
            &self.target,
            self.property_id.as_ref(),
            self.property_label.as_deref(),
        )
    }
}

/// Dedup identity of an edge: absent property fields compare as empty strings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    source: EntityId,
    target: EntityId,
    property_id: String,
    property_label: String,
}

impl EdgeKey {
    pub fn new(
        source: &EntityId,
        target: &EntityId,
        property_id: Option<&PropertyId>,
        property_label: Option<&str>,
    ) -> Self {
        Self {
            source: source.clone(),
            target: target.clone(),
            property_id: property_id.map(|p| p.to_string()).unwrap_or_default(),
            property_label: property_label.unwrap_or_default().to_string(),
        }
    }
}

/// Number of distinct edges carrying one (property id, label) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyCount {
    pub property_id: String,
    pub property_label: String,
    pub edges: usize,
}

// ============================================================
// Graph Document
// ============================================================

/// Finalized, immutable graph
///
/// Serializes as `{"nodes": [...], "edges": [...]}`; nodes keep first-seen
/// order, edges keep insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct GraphDocument {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,

    #[serde(skip)]
    node_index: AHashMap<EntityId, usize>,

    #[serde(skip)]
    property_counts: Vec<PropertyCount>,
}

impl GraphDocument {
    pub(crate) fn new(
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
        mut property_counts: Vec<PropertyCount>,
    ) -> Self {
        let node_index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        property_counts.sort_by(|a, b| {
            b.edges
                .cmp(&a.edges)
                .then_with(|| a.property_id.cmp(&b.property_id))
                .then_with(|| a.property_label.cmp(&b.property_label))
        });
        Self {
            nodes,
            edges,
            node_index,
            property_counts,
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Get node by ID (O(1))
    #[inline]
    pub fn get_node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    /// Outgoing edges of a node (O(E) scan)
    pub fn get_edges_from(&self, source: &str) -> Vec<&GraphEdge> {
        self.edges
            .iter()
            .filter(|e| e.source.as_str() == source)
            .collect()
    }

    /// Incoming edges of a node (O(E) scan)
    pub fn get_edges_to(&self, target: &str) -> Vec<&GraphEdge> {
        self.edges
            .iter()
            .filter(|e| e.target.as_str() == target)
            .collect()
    }

    /// Edge counts per (property id, label), most frequent first
    pub fn property_counts(&self) -> &[PropertyCount] {
        &self.property_counts
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the graph
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_nodes: self.nodes.len(),
            total_edges: self.edges.len(),
            unlabeled_nodes: self.nodes.iter().filter(|n| n.label.is_empty()).count(),
            distinct_properties: self.property_counts.len(),
        }
    }
}

/// Graph statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub unlabeled_nodes: usize,
    pub distinct_properties: usize,
}
