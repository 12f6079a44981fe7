//! Infrastructure: concrete exporters, atomic writes, input discovery

pub mod atomic;
pub mod csv;
pub mod discovery;
pub mod gexf;
pub mod json;

pub use atomic::write_atomic;
pub use csv::CsvExporter;
pub use discovery::discover_inputs;
pub use gexf::{write_gexf, GexfError, GexfExporter};
pub use json::JsonExporter;

use crate::domain::{ExportFormat, GraphExporter};

/// Exporter implementing `format`
pub fn exporter_for(format: ExportFormat) -> Box<dyn GraphExporter> {
    match format {
        ExportFormat::Json => Box::new(JsonExporter),
        ExportFormat::Gexf => Box::new(GexfExporter),
        ExportFormat::Csv => Box::new(CsvExporter),
    }
}
