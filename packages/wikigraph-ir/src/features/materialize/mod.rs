//! Graph Materializer
//!
//! Turns a finalized [`GraphDocument`] into a directed multigraph whose node
//! and edge attributes are flat scalars (every attribute goes through the
//! sanitizer). Parallel edges between the same pair of nodes are kept: the
//! dedup key includes the property, so two relations between the same
//! entities are two edges.
//!
//! Also provides degree queries and the degree-sorted node table.

use ahash::AHashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::features::graph_builder::GraphDocument;
use crate::features::sanitizer::{to_serializable, AttrValue};
use crate::shared::models::Value;

/// Attribute name → sanitized value (sorted by name)
pub type AttrMap = BTreeMap<String, AttrValue>;

#[derive(Debug, Clone, PartialEq)]
pub struct VizNode {
    pub id: String,
    pub attrs: AttrMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VizEdge {
    pub attrs: AttrMap,
}

/// Row of the node table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeTableRow {
    pub id: String,
    pub label: String,
    pub degree: usize,
}

/// Directed multigraph with sanitized attributes
#[derive(Debug, Clone, Default)]
pub struct VisualizationGraph {
    graph: DiGraph<VizNode, VizEdge>,
    index: AHashMap<String, NodeIndex>,
}

impl VisualizationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(doc: &GraphDocument) -> Self {
        let mut viz = Self {
            graph: DiGraph::with_capacity(doc.nodes().len(), doc.edges().len()),
            index: AHashMap::with_capacity(doc.nodes().len()),
        };

        for node in doc.nodes() {
            viz.add_node(node.id.as_str(), sanitized_attrs(node, &["id"]));
        }
        for edge in doc.edges() {
            viz.add_edge(
                edge.source.as_str(),
                edge.target.as_str(),
                sanitized_attrs(edge, &["source", "target"]),
            );
        }
        viz
    }

    /// Insert a node, or replace the attributes of an existing one
    pub fn add_node(&mut self, id: impl Into<String>, attrs: AttrMap) {
        let id = id.into();
        if let Some(&ix) = self.index.get(&id) {
            self.graph[ix].attrs = attrs;
            return;
        }
        let ix = self.graph.add_node(VizNode {
            id: id.clone(),
            attrs,
        });
        self.index.insert(id, ix);
    }

    /// Append a parallel-safe edge. Returns false if an endpoint is unknown.
    pub fn add_edge(&mut self, source: &str, target: &str, attrs: AttrMap) -> bool {
        let (Some(&src), Some(&dst)) = (self.index.get(source), self.index.get(target)) else {
            return false;
        };
        self.graph.add_edge(src, dst, VizEdge { attrs });
        true
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in document order
    pub fn nodes(&self) -> impl Iterator<Item = &VizNode> {
        self.graph.node_indices().map(move |ix| &self.graph[ix])
    }

    /// Edges in document order as (source id, target id, edge)
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &VizEdge)> {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].id.as_str(),
                self.graph[e.target()].id.as_str(),
                e.weight(),
            )
        })
    }

    pub fn node(&self, id: &str) -> Option<&VizNode> {
        self.index.get(id).map(|&ix| &self.graph[ix])
    }

    /// Incident edges in both directions; parallel edges count individually,
    /// a self-loop counts twice. Unknown ids have degree 0.
    pub fn degree(&self, id: &str) -> usize {
        match self.index.get(id) {
            Some(&ix) => {
                self.graph.edges_directed(ix, Direction::Outgoing).count()
                    + self.graph.edges_directed(ix, Direction::Incoming).count()
            }
            None => 0,
        }
    }

    /// Copy with every attribute value coerced to text
    pub fn stringified(&self) -> Self {
        let graph = self.graph.map(
            |_, node| VizNode {
                id: node.id.clone(),
                attrs: stringify_attrs(&node.attrs),
            },
            |_, edge| VizEdge {
                attrs: stringify_attrs(&edge.attrs),
            },
        );
        Self {
            graph,
            index: self.index.clone(),
        }
    }

    /// One row per node, sorted by degree descending then label ascending
    pub fn node_table(&self) -> Vec<NodeTableRow> {
        let mut rows: Vec<NodeTableRow> = self
            .graph
            .node_indices()
            .map(|ix| {
                let node = &self.graph[ix];
                NodeTableRow {
                    id: node.id.clone(),
                    label: node
                        .attrs
                        .get("label")
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                    degree: self.graph.edges_directed(ix, Direction::Outgoing).count()
                        + self.graph.edges_directed(ix, Direction::Incoming).count(),
                }
            })
            .collect();
        rows.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.label.cmp(&b.label)));
        rows
    }
}

/// Serialize `item` to a JSON object and sanitize every field except `skip`
fn sanitized_attrs<T: Serialize>(item: &T, skip: &[&str]) -> AttrMap {
    match serde_json::to_value(item) {
        Ok(Value::Object(fields)) => fields
            .into_iter()
            .filter(|(key, _)| !skip.contains(&key.as_str()))
            .map(|(key, value)| {
                let value = to_serializable(&value);
                (key, value)
            })
            .collect(),
        _ => AttrMap::new(),
    }
}

fn stringify_attrs(attrs: &AttrMap) -> AttrMap {
    attrs
        .iter()
        .map(|(k, v)| (k.clone(), v.clone().into_text()))
        .collect()
}
