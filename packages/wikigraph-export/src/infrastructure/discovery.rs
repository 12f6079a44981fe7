//! Input discovery
//!
//! Lists the export files of a run in sorted path order so ingestion is
//! deterministic across platforms.

use std::path::PathBuf;

use tracing::{debug, warn};
use walkdir::WalkDir;
use wikigraph_ir::IntegrationConfig;

use crate::error::Result;

/// Files under `config.input_dir` with `config.input_extension`, sorted.
///
/// Only the top level is scanned unless `config.recursive`. A missing input
/// directory yields no files. The run's own graph document is excluded so a
/// rerun does not ingest its previous output.
pub fn discover_inputs(config: &IntegrationConfig) -> Result<Vec<PathBuf>> {
    if !config.input_dir.is_dir() {
        warn!("Input directory {} does not exist", config.input_dir.display());
        return Ok(Vec::new());
    }

    let max_depth = if config.recursive { usize::MAX } else { 1 };
    let own_output = config.graph_json_path();

    let mut files = Vec::new();
    for entry in WalkDir::new(&config.input_dir)
        .min_depth(1)
        .max_depth(max_depth)
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == config.input_extension);
        if !matches {
            continue;
        }
        if path == own_output {
            debug!("Ignoring previous output {}", path.display());
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}
