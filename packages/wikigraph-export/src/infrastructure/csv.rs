//! Tabular writers (`<prefix>_nodes.csv`, `<prefix>_edges.csv`)
//!
//! UTF-8 with a leading byte-order mark so spreadsheet tools detect the
//! encoding. Fields are quoted per RFC 4180 only when they contain a comma,
//! a double quote or a line break. Records end with CRLF.

use std::borrow::Cow;
use std::path::PathBuf;

use wikigraph_ir::{GraphDocument, IntegrationConfig, VisualizationGraph};

use super::atomic::write_atomic;
use crate::domain::{ExportFormat, ExportInput, GraphExporter};
use crate::error::Result;

const BOM: &str = "\u{feff}";

pub const NODE_HEADER: [&str; 3] = ["id", "label", "degree"];
pub const EDGE_HEADER: [&str; 4] = ["source", "target", "property_id", "property_label"];

fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Accumulates records into one CSV buffer
#[derive(Debug)]
struct CsvBuffer {
    out: String,
}

impl CsvBuffer {
    fn with_header(header: &[&str]) -> Self {
        let mut buffer = Self {
            out: String::from(BOM),
        };
        buffer.record(header.iter().copied());
        buffer
    }

    fn record<'a, I: IntoIterator<Item = &'a str>>(&mut self, fields: I) {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.out.push_str(&quote_field(field));
        }
        self.out.push_str("\r\n");
    }

    fn into_bytes(self) -> Vec<u8> {
        self.out.into_bytes()
    }
}

/// Node table sorted by degree descending, then label ascending
pub fn render_nodes(graph: &VisualizationGraph) -> Vec<u8> {
    let mut buffer = CsvBuffer::with_header(&NODE_HEADER);
    for row in graph.node_table() {
        let degree = row.degree.to_string();
        buffer.record([row.id.as_str(), row.label.as_str(), degree.as_str()]);
    }
    buffer.into_bytes()
}

/// Edge list in insertion order; absent property fields are empty
pub fn render_edges(document: &GraphDocument) -> Vec<u8> {
    let mut buffer = CsvBuffer::with_header(&EDGE_HEADER);
    for edge in document.edges() {
        buffer.record([
            edge.source.as_str(),
            edge.target.as_str(),
            edge.property_id.as_ref().map(|p| p.as_str()).unwrap_or(""),
            edge.property_label.as_deref().unwrap_or(""),
        ]);
    }
    buffer.into_bytes()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl GraphExporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn export(&self, input: &ExportInput<'_>, config: &IntegrationConfig) -> Result<Vec<PathBuf>> {
        let nodes_path = config.nodes_csv_path();
        let edges_path = config.edges_csv_path();
        write_atomic(&nodes_path, &render_nodes(input.graph))?;
        write_atomic(&edges_path, &render_edges(input.document))?;
        Ok(vec![nodes_path, edges_path])
    }
}
