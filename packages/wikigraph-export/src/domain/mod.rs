//! Domain layer for graph exports
//!
//! # Domain Models
//!
//! - `ExportFormat`: one family of output artifacts
//! - `ExportInput`: the finalized graph plus its visualization view
//!
//! # Port Trait
//!
//! - `GraphExporter`: writes one format's artifacts under a configured prefix

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use wikigraph_ir::{GraphDocument, IntegrationConfig, VisualizationGraph};

use crate::error::{ExportError, Result};

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// Output format family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// `<prefix>.json`
    Json,
    /// `<prefix>.gexf`
    Gexf,
    /// `<prefix>_nodes.csv` and `<prefix>_edges.csv`
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Gexf, ExportFormat::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Gexf => "gexf",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "gexf" => Ok(ExportFormat::Gexf),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ExportError::config(format!(
                "unknown export format '{}' (expected json, gexf or csv)",
                other
            ))),
        }
    }
}

/// Everything an exporter may read
#[derive(Debug, Clone, Copy)]
pub struct ExportInput<'a> {
    pub document: &'a GraphDocument,
    pub graph: &'a VisualizationGraph,
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait
// ═══════════════════════════════════════════════════════════════════════════

/// Writes the artifacts of one format
///
/// Implementations derive their paths from `config` and return them in the
/// order written. Every artifact is written atomically.
pub trait GraphExporter {
    fn format(&self) -> ExportFormat;

    fn export(&self, input: &ExportInput<'_>, config: &IntegrationConfig) -> Result<Vec<PathBuf>>;
}
