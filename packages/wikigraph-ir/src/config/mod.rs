//! Configuration System
//!
//! A single explicit [`IntegrationConfig`] describes one run: input directory,
//! input extension, recursion, and the output prefix every artifact path is
//! derived from. It can be built in code or loaded from a versioned YAML file.
//!
//! # Examples
//!
//! ```rust,ignore
//! use wikigraph_ir::config::IntegrationConfig;
//!
//! let config = IntegrationConfig::new()
//!     .with_input_dir("exports")
//!     .with_output_prefix("out/merged");
//!
//! let config = IntegrationConfig::from_yaml("wikigraph.yaml")?;
//! ```

pub mod error;
pub mod integration_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use integration_config::{IntegrationConfig, SUPPORTED_VERSIONS};
