//! Custom assertions for test verification

use wikigraph_ir::GraphDocument;

/// Assert the graph has exactly the given node ids (any order)
pub fn assert_node_ids(graph: &GraphDocument, expected: &[&str]) {
    let mut ids: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    ids.sort_unstable();
    let mut expected = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(ids, expected, "node ids differ");
}

/// Assert the graph has exactly the given (source, target, property id, property label) edges
pub fn assert_edges(graph: &GraphDocument, expected: &[(&str, &str, Option<&str>, Option<&str>)]) {
    let edges: Vec<(&str, &str, Option<&str>, Option<&str>)> = graph
        .edges()
        .iter()
        .map(|e| {
            (
                e.source.as_str(),
                e.target.as_str(),
                e.property_id.as_ref().map(|p| p.as_str()),
                e.property_label.as_deref(),
            )
        })
        .collect();
    assert_eq!(edges, expected, "edges differ");
}

/// Assert node `id` exists with canonical label `label`
pub fn assert_label(graph: &GraphDocument, id: &str, label: &str) {
    let node = graph
        .get_node(id)
        .unwrap_or_else(|| panic!("node {id} missing"));
    assert_eq!(node.label, label, "label of {id}");
}
