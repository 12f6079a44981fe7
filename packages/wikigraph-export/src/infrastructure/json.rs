//! Graph document writer (`<prefix>.json`)

use std::path::PathBuf;

use wikigraph_ir::IntegrationConfig;

use super::atomic::write_atomic;
use crate::domain::{ExportFormat, ExportInput, GraphExporter};
use crate::error::Result;

/// Pretty-printed `{nodes, edges}` document; Unicode is written unescaped
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

impl GraphExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, input: &ExportInput<'_>, config: &IntegrationConfig) -> Result<Vec<PathBuf>> {
        let path = config.graph_json_path();
        let mut bytes = serde_json::to_vec_pretty(input.document)?;
        bytes.push(b'\n');
        write_atomic(&path, &bytes)?;
        Ok(vec![path])
    }
}
