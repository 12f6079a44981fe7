//! End-to-end tests: export files on disk → graph → every output format

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use wikigraph_export::{discover_inputs, export_graph, ExportFormat};
use wikigraph_ir::features::graph_builder::{GraphBuilderUseCase, GraphBuilderUseCaseImpl};
use wikigraph_ir::IntegrationConfig;

const BOM: &str = "\u{feff}";

fn earth_row() -> Value {
    json!({
        "item": {"type": "uri", "value": "http://www.wikidata.org/entity/Q1"},
        "itemLabel": {"type": "literal", "xml:lang": "en", "value": "Earth"},
        "prop": {"type": "uri", "value": "http://www.wikidata.org/prop/direct/P31"},
        "propLabel": {"type": "literal", "xml:lang": "en", "value": "instance of"},
        "value": {"type": "uri", "value": "http://www.wikidata.org/entity/Q2"},
        "valueLabel": {"type": "literal", "xml:lang": "en", "value": "Planet"},
    })
}

fn write_json(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_vec(value).unwrap()).unwrap();
}

fn run(config: &IntegrationConfig) -> Vec<std::path::PathBuf> {
    let inputs = discover_inputs(config).unwrap();
    let result = GraphBuilderUseCaseImpl::new().build_graph(&inputs);
    export_graph(&result.graph, &ExportFormat::ALL, config).unwrap()
}

// ============================================================================
// Library pipeline
// ============================================================================

#[test]
fn test_two_files_same_row_all_formats() {
    let dir = TempDir::new().unwrap();
    let doc = json!({"results": {"bindings": [earth_row()]}});
    write_json(dir.path(), "a.json", &doc);
    write_json(dir.path(), "b.json", &doc);

    let config = IntegrationConfig::new()
        .with_input_dir(dir.path())
        .with_output_prefix(dir.path().join("out/merged"));
    let written = run(&config);

    assert_eq!(
        written,
        vec![
            config.graph_json_path(),
            config.gexf_path(),
            config.nodes_csv_path(),
            config.edges_csv_path(),
        ]
    );

    let graph: Value = serde_json::from_slice(&fs::read(config.graph_json_path()).unwrap()).unwrap();
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(graph["edges"].as_array().unwrap().len(), 1);

    let nodes = fs::read_to_string(config.nodes_csv_path()).unwrap();
    assert_eq!(
        nodes,
        format!("{BOM}id,label,degree\r\nQ1,Earth,1\r\nQ2,Planet,1\r\n")
    );

    let edges = fs::read_to_string(config.edges_csv_path()).unwrap();
    assert_eq!(
        edges,
        format!("{BOM}source,target,property_id,property_label\r\nQ1,Q2,P31,instance of\r\n")
    );

    let gexf = fs::read_to_string(config.gexf_path()).unwrap();
    assert!(gexf.starts_with("<?xml"));
    assert!(gexf.contains(r#"<node id="Q1" label="Earth">"#));
    assert!(gexf.contains(r#"source="Q1" target="Q2""#));
}

#[test]
fn test_rerun_is_stable() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "a.json", &json!([earth_row()]));

    // Output lands next to the inputs, as with the default layout
    let config = IntegrationConfig::new()
        .with_input_dir(dir.path())
        .with_output_prefix(dir.path().join("merged"));

    run(&config);
    let first = fs::read(config.graph_json_path()).unwrap();
    run(&config);
    let second = fs::read(config.graph_json_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_selected_formats_only() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "a.json", &json!([earth_row()]));
    let config = IntegrationConfig::new()
        .with_input_dir(dir.path())
        .with_output_prefix(dir.path().join("merged"));

    let inputs = discover_inputs(&config).unwrap();
    let result = GraphBuilderUseCaseImpl::new().build_graph(&inputs);
    let written = export_graph(
        &result.graph,
        &[ExportFormat::Csv, ExportFormat::Csv],
        &config,
    )
    .unwrap();

    assert_eq!(written, vec![config.nodes_csv_path(), config.edges_csv_path()]);
    assert!(!config.graph_json_path().exists());
    assert!(!config.gexf_path().exists());
}

#[test]
fn test_bad_file_does_not_block_export() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
    write_json(dir.path(), "good.json", &json!([earth_row()]));
    let config = IntegrationConfig::new()
        .with_input_dir(dir.path())
        .with_output_prefix(dir.path().join("out/merged"));

    let inputs = discover_inputs(&config).unwrap();
    let result = GraphBuilderUseCaseImpl::new().build_graph(&inputs);
    assert_eq!(result.summary.files_skipped(), 1);

    export_graph(&result.graph, &ExportFormat::ALL, &config).unwrap();
    let graph: Value = serde_json::from_slice(&fs::read(config.graph_json_path()).unwrap()).unwrap();
    assert_eq!(graph["edges"][0]["property_label"], "instance of");
}

// ============================================================================
// CLI
// ============================================================================

fn wikigraph() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wikigraph"))
}

#[test]
fn test_cli_no_input_exits_zero() {
    let dir = TempDir::new().unwrap();
    let status = wikigraph()
        .arg("--input")
        .arg(dir.path().join("empty"))
        .arg("--output-prefix")
        .arg(dir.path().join("merged"))
        .status()
        .unwrap();

    assert!(status.success());
    assert!(!dir.path().join("merged.json").exists());
}

#[test]
fn test_cli_writes_requested_formats() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "a.json", &json!([earth_row()]));
    let prefix = dir.path().join("out/merged");

    let status = wikigraph()
        .arg("--input")
        .arg(dir.path())
        .arg("--output-prefix")
        .arg(&prefix)
        .arg("--format")
        .arg("json,gexf")
        .status()
        .unwrap();

    assert!(status.success());
    assert!(dir.path().join("out/merged.json").exists());
    assert!(dir.path().join("out/merged.gexf").exists());
    assert!(!dir.path().join("out/merged_nodes.csv").exists());
}

#[test]
fn test_cli_config_file_and_bad_config() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "a.json", &json!([earth_row()]));

    let config_path = dir.path().join("wikigraph.yaml");
    fs::write(
        &config_path,
        format!(
            "version: 1\ninput_dir: {}\noutput_prefix: {}\n",
            dir.path().display(),
            dir.path().join("merged").display()
        ),
    )
    .unwrap();
    let status = wikigraph().arg("--config").arg(&config_path).status().unwrap();
    assert!(status.success());
    assert!(dir.path().join("merged_edges.csv").exists());

    let bad = dir.path().join("bad.yaml");
    fs::write(&bad, "input_dir: data\n").unwrap();
    let status = wikigraph().arg("--config").arg(&bad).status().unwrap();
    assert!(!status.success());
}

#[test]
fn test_cli_rejects_unknown_format() {
    let status = wikigraph().arg("--format").arg("graphml").status().unwrap();
    assert!(!status.success());
}
