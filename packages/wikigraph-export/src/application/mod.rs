//! Export use case: one finalized graph → every requested format

use std::path::PathBuf;

use tracing::{debug, info};
use wikigraph_ir::{GraphDocument, IntegrationConfig, VisualizationGraph};

use crate::domain::{ExportFormat, ExportInput};
use crate::error::Result;
use crate::infrastructure::exporter_for;

/// Write `document` in each of `formats` (duplicates ignored) and return the
/// artifact paths in the order written.
///
/// The visualization graph is materialized once and shared by the GEXF and
/// CSV writers. Stops at the first failing format.
pub fn export_graph(
    document: &GraphDocument,
    formats: &[ExportFormat],
    config: &IntegrationConfig,
) -> Result<Vec<PathBuf>> {
    config.validate()?;

    let graph = VisualizationGraph::from_document(document);
    let input = ExportInput {
        document,
        graph: &graph,
    };

    let mut seen = Vec::with_capacity(formats.len());
    let mut written = Vec::new();
    for &format in formats {
        if seen.contains(&format) {
            continue;
        }
        seen.push(format);

        let exporter = exporter_for(format);
        debug!("Exporting {}", exporter.format());
        let paths = exporter.export(&input, config)?;
        for path in &paths {
            info!("Wrote {}", path.display());
        }
        written.extend(paths);
    }
    Ok(written)
}
