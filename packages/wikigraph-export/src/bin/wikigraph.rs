//! Wikigraph CLI
//!
//! Merges SPARQL result exports into one deduplicated graph and writes it as
//! JSON, GEXF and CSV.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: data/*.json → data/grafo_unificado.*
//! cargo run --bin wikigraph --release
//!
//! # Explicit paths, JSON + CSV only
//! cargo run --bin wikigraph -- --input exports --output-prefix out/merged --format json,csv
//!
//! # From a config file, more logging
//! RUST_LOG=debug cargo run --bin wikigraph -- --config wikigraph.yaml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wikigraph_export::{discover_inputs, export_graph, ExportFormat};
use wikigraph_ir::features::graph_builder::{GraphBuilderUseCase, GraphBuilderUseCaseImpl};
use wikigraph_ir::IntegrationConfig;

/// Property counts listed in the run summary
const TOP_PROPERTIES: usize = 10;

#[derive(Parser)]
#[command(name = "wikigraph")]
#[command(about = "Integrate SPARQL result exports into one deduplicated graph", long_about = None)]
struct Cli {
    /// YAML config file (command-line flags override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the export files
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path prefix for every output artifact
    #[arg(short, long)]
    output_prefix: Option<PathBuf>,

    /// Also scan subdirectories of the input directory
    #[arg(short, long)]
    recursive: bool,

    /// Output formats, comma separated
    #[arg(long, value_delimiter = ',', default_value = "json,gexf,csv")]
    format: Vec<ExportFormat>,
}

impl Cli {
    fn resolve_config(&self) -> Result<IntegrationConfig> {
        let mut config = match &self.config {
            Some(path) => IntegrationConfig::from_yaml(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => IntegrationConfig::new(),
        };
        if let Some(input) = &self.input {
            config = config.with_input_dir(input);
        }
        if let Some(prefix) = &self.output_prefix {
            config = config.with_output_prefix(prefix);
        }
        if self.recursive {
            config = config.recursive(true);
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let inputs = discover_inputs(&config)
        .with_context(|| format!("scanning {}", config.input_dir.display()))?;
    if inputs.is_empty() {
        info!(
            "No *.{} files found in {}; nothing to do",
            config.input_extension,
            config.input_dir.display()
        );
        return Ok(());
    }
    info!("Found {} input files", inputs.len());

    let result = GraphBuilderUseCaseImpl::new().build_graph(&inputs);
    let summary = &result.summary;
    if summary.files_skipped() > 0 {
        warn!(
            "{} of {} files could not be read",
            summary.files_skipped(),
            inputs.len()
        );
    }
    if summary.rows_failed() > 0 {
        warn!("{} malformed rows skipped", summary.rows_failed());
    }

    let stats = result.graph.stats();
    info!(
        "Graph: {} nodes ({} unlabeled), {} edges, {} distinct properties",
        stats.total_nodes, stats.unlabeled_nodes, stats.total_edges, stats.distinct_properties
    );
    for count in result.graph.property_counts().iter().take(TOP_PROPERTIES) {
        info!(
            "  {:>6}  {} {}",
            count.edges, count.property_id, count.property_label
        );
    }

    export_graph(&result.graph, &cli.format, &config).context("export failed")?;
    Ok(())
}
