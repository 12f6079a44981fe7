//! Ingest outcomes
//!
//! Every row and every file produces an outcome instead of a swallowed
//! exception, so callers can inspect what was skipped and why.

use std::path::PathBuf;

use crate::errors::{LoadError, RowError};

/// Result of ingesting one well-formed row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// Subject and object resolved; `added` is false when the edge was a duplicate
    Edge { added: bool },
    /// Subject resolved, object is not an entity: node only
    NodeOnly,
    /// No subject column resolved; row ignored
    NoSubject,
}

/// A row that could not be interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// Position of the row inside its document
    pub index: usize,
    pub error: RowError,
}

/// Per-document counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub edges_added: usize,
    pub duplicate_edges: usize,
    pub node_only: usize,
    pub no_subject: usize,
    pub failures: Vec<RowFailure>,
}

impl BatchSummary {
    pub(crate) fn record(&mut self, index: usize, outcome: Result<RowOutcome, RowError>) {
        self.rows += 1;
        match outcome {
            Ok(RowOutcome::Edge { added: true }) => self.edges_added += 1,
            Ok(RowOutcome::Edge { added: false }) => self.duplicate_edges += 1,
            Ok(RowOutcome::NodeOnly) => self.node_only += 1,
            Ok(RowOutcome::NoSubject) => self.no_subject += 1,
            Err(error) => self.failures.push(RowFailure { index, error }),
        }
    }

    /// Rows that contributed to the graph
    pub fn rows_ingested(&self) -> usize {
        self.edges_added + self.duplicate_edges + self.node_only
    }

    pub fn rows_failed(&self) -> usize {
        self.failures.len()
    }
}

/// What happened to one input document
#[derive(Debug)]
pub enum FileOutcome {
    Ingested(BatchSummary),
    Skipped(LoadError),
}

#[derive(Debug)]
pub struct FileReport {
    pub source: PathBuf,
    pub outcome: FileOutcome,
}

/// Outcome of a whole ingestion run
#[derive(Debug, Default)]
pub struct IngestSummary {
    pub reports: Vec<FileReport>,
}

impl IngestSummary {
    pub fn files_ingested(&self) -> usize {
        self.batches().count()
    }

    pub fn files_skipped(&self) -> usize {
        self.skipped().count()
    }

    /// Documents that could not be loaded, with the reason
    pub fn skipped(&self) -> impl Iterator<Item = (&PathBuf, &LoadError)> {
        self.reports.iter().filter_map(|r| match &r.outcome {
            FileOutcome::Skipped(err) => Some((&r.source, err)),
            FileOutcome::Ingested(_) => None,
        })
    }

    /// Per-document counters for every loaded document
    pub fn batches(&self) -> impl Iterator<Item = (&PathBuf, &BatchSummary)> {
        self.reports.iter().filter_map(|r| match &r.outcome {
            FileOutcome::Ingested(batch) => Some((&r.source, batch)),
            FileOutcome::Skipped(_) => None,
        })
    }

    pub fn rows_total(&self) -> usize {
        self.batches().map(|(_, b)| b.rows).sum()
    }

    pub fn rows_ingested(&self) -> usize {
        self.batches().map(|(_, b)| b.rows_ingested()).sum()
    }

    pub fn rows_without_subject(&self) -> usize {
        self.batches().map(|(_, b)| b.no_subject).sum()
    }

    pub fn rows_failed(&self) -> usize {
        self.batches().map(|(_, b)| b.rows_failed()).sum()
    }

    pub fn edges_added(&self) -> usize {
        self.batches().map(|(_, b)| b.edges_added).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_record_counts() {
        let mut batch = BatchSummary::default();
        batch.record(0, Ok(RowOutcome::Edge { added: true }));
        batch.record(1, Ok(RowOutcome::Edge { added: false }));
        batch.record(2, Ok(RowOutcome::NodeOnly));
        batch.record(3, Ok(RowOutcome::NoSubject));
        batch.record(4, Err(RowError::NotAnObject { found: "null" }));

        assert_eq!(batch.rows, 5);
        assert_eq!(batch.rows_ingested(), 3);
        assert_eq!(batch.no_subject, 1);
        assert_eq!(batch.rows_failed(), 1);
        assert_eq!(batch.failures[0].index, 4);
    }

    #[test]
    fn test_ingest_summary_totals() {
        let mut batch = BatchSummary::default();
        batch.record(0, Ok(RowOutcome::Edge { added: true }));

        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let summary = IngestSummary {
            reports: vec![
                FileReport {
                    source: PathBuf::from("a.json"),
                    outcome: FileOutcome::Ingested(batch),
                },
                FileReport {
                    source: PathBuf::from("b.json"),
                    outcome: FileOutcome::Skipped(LoadError::Json {
                        path: PathBuf::from("b.json"),
                        source: json_err,
                    }),
                },
            ],
        };

        assert_eq!(summary.files_ingested(), 1);
        assert_eq!(summary.files_skipped(), 1);
        assert_eq!(summary.rows_total(), 1);
        assert_eq!(summary.edges_added(), 1);
        let (path, _) = summary.skipped().next().unwrap();
        assert_eq!(path, &PathBuf::from("b.json"));
    }
}
