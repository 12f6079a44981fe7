//! Visualization graph writer (`<prefix>.gexf`)
//!
//! Emits GEXF 1.2draft (directed, static). Each attribute name gets one
//! declaration per class (node / edge) carrying its scalar type. A name seen
//! with two different types cannot be declared; the exporter then retries on
//! the stringified graph where every attribute is `string`.
//!
//! Usage:
//! ```text
//! let bytes = write_gexf(&graph)?;          // typed attributes
//! let bytes = write_gexf(&graph.stringified())?; // degraded, all text
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;
use tracing::info;
use wikigraph_ir::{AttrKind, AttrMap, IntegrationConfig, VisualizationGraph};

use super::atomic::write_atomic;
use crate::domain::{ExportFormat, ExportInput, GraphExporter};
use crate::error::{ExportError, Result};

const GEXF_NS: &str = "http://www.gexf.net/1.2draft";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://www.gexf.net/1.2draft http://www.gexf.net/1.2draft/gexf.xsd";

/// Node attribute rendered as the `label` XML attribute instead of an attvalue
const NODE_LABEL_ATTR: &str = "label";

// ============================================================
// Errors
// ============================================================

#[derive(Debug, Error)]
pub enum GexfError {
    #[error("{class} attribute '{name}' has conflicting types {first:?} and {second:?}")]
    MixedAttributeType {
        class: &'static str,
        name: String,
        first: AttrKind,
        second: AttrKind,
    },

    #[error("XML write failed: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub type GexfResult<T> = std::result::Result<T, GexfError>;

// ============================================================
// Attribute declarations
// ============================================================

fn gexf_type(kind: AttrKind) -> &'static str {
    match kind {
        AttrKind::Text => "string",
        AttrKind::Int => "long",
        AttrKind::Float => "double",
        AttrKind::Bool => "boolean",
    }
}

/// Attribute name → (declaration id, type), ids assigned in name order
#[derive(Debug, Default)]
struct AttrDecls {
    entries: BTreeMap<String, (usize, AttrKind)>,
}

impl AttrDecls {
    fn collect<'a, I>(class: &'static str, maps: I, skip: Option<&str>) -> GexfResult<Self>
    where
        I: IntoIterator<Item = &'a AttrMap>,
    {
        let mut kinds: BTreeMap<String, AttrKind> = BTreeMap::new();
        for attrs in maps {
            for (name, value) in attrs {
                if Some(name.as_str()) == skip {
                    continue;
                }
                let kind = value.kind();
                match kinds.get(name) {
                    Some(&first) if first != kind => {
                        return Err(GexfError::MixedAttributeType {
                            class,
                            name: name.clone(),
                            first,
                            second: kind,
                        });
                    }
                    Some(_) => {}
                    None => {
                        kinds.insert(name.clone(), kind);
                    }
                }
            }
        }

        let entries = kinds
            .into_iter()
            .enumerate()
            .map(|(id, (name, kind))| (name, (id, kind)))
            .collect();
        Ok(Self { entries })
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.entries.get(name).map(|&(id, _)| id)
    }

    fn write<W: std::io::Write>(&self, writer: &mut Writer<W>, class: &str) -> GexfResult<()> {
        let mut start = BytesStart::new("attributes");
        start.push_attribute(("class", class));
        start.push_attribute(("mode", "static"));

        if self.entries.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for (name, &(id, kind)) in &self.entries {
            let id = id.to_string();
            let mut attribute = BytesStart::new("attribute");
            attribute.push_attribute(("id", id.as_str()));
            attribute.push_attribute(("title", name.as_str()));
            attribute.push_attribute(("type", gexf_type(kind)));
            writer.write_event(Event::Empty(attribute))?;
        }
        writer.write_event(Event::End(BytesEnd::new("attributes")))?;
        Ok(())
    }
}

// ============================================================
// Writer
// ============================================================

/// Serialize `graph` as a GEXF document
///
/// Fails with [`GexfError::MixedAttributeType`] if an attribute name carries
/// values of different types within one class.
pub fn write_gexf(graph: &VisualizationGraph) -> GexfResult<Vec<u8>> {
    let node_decls = AttrDecls::collect(
        "node",
        graph.nodes().map(|n| &n.attrs),
        Some(NODE_LABEL_ATTR),
    )?;
    let edge_decls = AttrDecls::collect("edge", graph.edges().map(|(_, _, e)| &e.attrs), None)?;

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("gexf");
    root.push_attribute(("xmlns", GEXF_NS));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    root.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
    root.push_attribute(("version", "1.2"));
    writer.write_event(Event::Start(root))?;

    writer.write_event(Event::Start(BytesStart::new("meta")))?;
    writer.write_event(Event::Start(BytesStart::new("creator")))?;
    writer.write_event(Event::Text(BytesText::new(concat!(
        "wikigraph ",
        env!("CARGO_PKG_VERSION")
    ))))?;
    writer.write_event(Event::End(BytesEnd::new("creator")))?;
    writer.write_event(Event::End(BytesEnd::new("meta")))?;

    let mut graph_el = BytesStart::new("graph");
    graph_el.push_attribute(("defaultedgetype", "directed"));
    graph_el.push_attribute(("mode", "static"));
    writer.write_event(Event::Start(graph_el))?;

    node_decls.write(&mut writer, "node")?;
    edge_decls.write(&mut writer, "edge")?;

    writer.write_event(Event::Start(BytesStart::new("nodes")))?;
    for node in graph.nodes() {
        let label = node
            .attrs
            .get(NODE_LABEL_ATTR)
            .map(|v| v.to_string())
            .unwrap_or_else(|| node.id.clone());
        let mut el = BytesStart::new("node");
        el.push_attribute(("id", node.id.as_str()));
        el.push_attribute(("label", label.as_str()));
        write_element(
            &mut writer,
            el,
            "node",
            &node.attrs,
            &node_decls,
            Some(NODE_LABEL_ATTR),
        )?;
    }
    writer.write_event(Event::End(BytesEnd::new("nodes")))?;

    writer.write_event(Event::Start(BytesStart::new("edges")))?;
    for (index, (source, target, edge)) in graph.edges().enumerate() {
        let id = index.to_string();
        let mut el = BytesStart::new("edge");
        el.push_attribute(("id", id.as_str()));
        el.push_attribute(("source", source));
        el.push_attribute(("target", target));
        write_element(&mut writer, el, "edge", &edge.attrs, &edge_decls, None)?;
    }
    writer.write_event(Event::End(BytesEnd::new("edges")))?;

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.write_event(Event::End(BytesEnd::new("gexf")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write a node or edge element with its `<attvalues>` block
fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    start: BytesStart<'_>,
    tag: &str,
    attrs: &AttrMap,
    decls: &AttrDecls,
    skip: Option<&str>,
) -> GexfResult<()> {
    let values: Vec<(usize, String)> = attrs
        .iter()
        .filter(|(name, _)| Some(name.as_str()) != skip)
        .filter_map(|(name, value)| decls.id(name).map(|id| (id, value.to_string())))
        .collect();

    if values.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Start(BytesStart::new("attvalues")))?;
    for (id, value) in &values {
        let id = id.to_string();
        let mut attvalue = BytesStart::new("attvalue");
        attvalue.push_attribute(("for", id.as_str()));
        attvalue.push_attribute(("value", value.as_str()));
        writer.write_event(Event::Empty(attvalue))?;
    }
    writer.write_event(Event::End(BytesEnd::new("attvalues")))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

// ============================================================
// Exporter
// ============================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct GexfExporter;

impl GexfExporter {
    /// Typed serialization, falling back to all-text attributes on a type conflict
    pub fn render(graph: &VisualizationGraph) -> Result<Vec<u8>> {
        match write_gexf(graph) {
            Ok(bytes) => Ok(bytes),
            Err(err @ GexfError::MixedAttributeType { .. }) => {
                info!("GEXF typed export failed ({}); writing all attributes as text", err);
                write_gexf(&graph.stringified()).map_err(gexf_to_export)
            }
            Err(err) => Err(gexf_to_export(err)),
        }
    }
}

fn gexf_to_export(err: GexfError) -> ExportError {
    match err {
        GexfError::Xml(xml) => xml.into(),
        other => ExportError::xml(other.to_string()).with_source(other),
    }
}

impl GraphExporter for GexfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Gexf
    }

    fn export(&self, input: &ExportInput<'_>, config: &IntegrationConfig) -> Result<Vec<PathBuf>> {
        let path = config.gexf_path();
        let bytes = Self::render(input.graph)?;
        write_atomic(&path, &bytes)?;
        Ok(vec![path])
    }
}
