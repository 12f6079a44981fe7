//! Integration run configuration
//!
//! Everything a run needs to know about where input lives and where output
//! goes. The structure is passed explicitly to discovery and export; nothing
//! is read from process-wide state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};

/// Schema versions `from_yaml` accepts
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationConfig {
    /// Directory scanned for SPARQL result exports
    pub input_dir: PathBuf,
    /// Output path prefix; artifact names are derived from its file name
    pub output_prefix: PathBuf,
    /// Extension (without dot) of input documents
    pub input_extension: String,
    /// Descend into subdirectories of `input_dir`
    pub recursive: bool,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data"),
            output_prefix: PathBuf::from("data").join("grafo_unificado"),
            input_extension: "json".to_string(),
            recursive: false,
        }
    }
}

/// YAML Schema v1
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    output_prefix: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_extension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    recursive: Option<bool>,
}

impl IntegrationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    /// Leading dots are dropped (`.json` and `json` are equivalent)
    pub fn with_input_extension(mut self, ext: impl AsRef<str>) -> Self {
        self.input_extension = ext.as_ref().trim_start_matches('.').to_string();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Load from a YAML file; fields absent from the file keep their defaults
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::default();
        if let Some(dir) = file.input_dir {
            config.input_dir = dir;
        }
        if let Some(prefix) = file.output_prefix {
            config.output_prefix = prefix;
        }
        if let Some(ext) = file.input_extension {
            config = config.with_input_extension(ext);
        }
        if let Some(recursive) = file.recursive {
            config.recursive = recursive;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            input_dir: Some(self.input_dir.clone()),
            output_prefix: Some(self.output_prefix.clone()),
            input_extension: Some(self.input_extension.clone()),
            recursive: Some(self.recursive),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.input_extension.is_empty() {
            return Err(ConfigError::invalid_field(
                "input_extension",
                "must not be empty",
            ));
        }
        if self.output_prefix.file_name().is_none() {
            return Err(ConfigError::invalid_field(
                "output_prefix",
                format!(
                    "'{}' does not end in a file name",
                    self.output_prefix.display()
                ),
            ));
        }
        Ok(())
    }

    /// Directory the artifacts are written into
    pub fn output_dir(&self) -> PathBuf {
        match self.output_prefix.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// `<prefix>.json`
    pub fn graph_json_path(&self) -> PathBuf {
        self.artifact_path(".json")
    }

    /// `<prefix>.gexf`
    pub fn gexf_path(&self) -> PathBuf {
        self.artifact_path(".gexf")
    }

    /// `<prefix>_nodes.csv`
    pub fn nodes_csv_path(&self) -> PathBuf {
        self.artifact_path("_nodes.csv")
    }

    /// `<prefix>_edges.csv`
    pub fn edges_csv_path(&self) -> PathBuf {
        self.artifact_path("_edges.csv")
    }

    fn artifact_path(&self, suffix: &str) -> PathBuf {
        let stem = self
            .output_prefix
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.output_dir().join(format!("{stem}{suffix}"))
    }
}
