//! Filesystem output for the generated report and README.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes a text artifact (Markdown, TSV, JSON, etc.) to `path`.
///
/// Missing parent directories are created first, so callers can point at a
/// fresh output tree without preparing it.
///
/// # Errors
///
/// Returns an error if a parent directory cannot be created or the file
/// itself cannot be written.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create output directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Cannot write {}", path.display()))?;
    Ok(())
}
