//! Atomic artifact writes
//!
//! Content goes to a temp file in the destination directory and is renamed
//! over the target, so readers see either the old file or the new one.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ExportError, Result};

/// Write `bytes` to `path` atomically, creating the parent directory if needed
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| {
        ExportError::io(format!("cannot create {}: {}", dir.display(), e)).with_source(e)
    })?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        ExportError::io(format!("cannot create temp file in {}: {}", dir.display(), e))
            .with_source(e)
    })?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| {
        ExportError::io(format!("cannot replace {}: {}", path.display(), e.error))
            .with_source(e.error)
    })?;
    Ok(())
}
