//! Error types for wikigraph-export

use std::fmt;
use thiserror::Error;

use wikigraph_ir::ConfigError;

/// Export error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Filesystem errors (discovery, temp files, rename)
    Io,
    /// JSON serialization errors
    Serialization,
    /// XML writer errors
    Xml,
    /// Configuration errors
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Io => "io",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Xml => "xml",
            ErrorKind::Config => "config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Export error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct ExportError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl ExportError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn xml(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Xml, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::io(format!("I/O error: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<quick_xml::Error> for ExportError {
    fn from(err: quick_xml::Error) -> Self {
        ExportError::xml(format!("XML error: {}", err)).with_source(err)
    }
}

impl From<walkdir::Error> for ExportError {
    fn from(err: walkdir::Error) -> Self {
        ExportError::io(format!("Directory walk failed: {}", err)).with_source(err)
    }
}

impl From<ConfigError> for ExportError {
    fn from(err: ConfigError) -> Self {
        ExportError::config(err.to_string()).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ExportError>;
