//! Row Normalization
//!
//! Maps an arbitrary SPARQL result binding onto six logical fields:
//! subject id/label, property id/label, object id/label.
//!
//! Each field is resolved through an ordered alias table (see [`aliases`]);
//! the first column whose extractor succeeds wins.

pub mod aliases;
pub mod domain;
pub mod normalizer;

pub use domain::{ColumnRule, Extractor, NormalizedRow};
pub use normalizer::{normalize_fields, normalize_row};
