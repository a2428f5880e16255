//! Working directory validation.
//! The listing root must be an existing, readable directory; it is returned in
//! canonical form so every later path is anchored to the same place.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Check `root` and return its canonical path.
pub fn validate_root(root: &Path) -> Result<PathBuf> {
    ensure_dir_exists_and_is_dir(root)?;
    ensure_readable(root)?;
    let canonical = dunce::canonicalize(root)
        .with_context(|| format!("canonicalize working directory '{}'", root.display()))?;
    debug!(root = %canonical.display(), "working directory validated");
    Ok(canonical)
}

fn ensure_dir_exists_and_is_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        error!("working directory does not exist: {}", path.display());
        bail!("working directory does not exist: {}", path.display());
    }
    if !path.is_dir() {
        error!("working directory is not a directory: {}", path.display());
        bail!("working directory is not a directory: {}", path.display());
    }
    Ok(())
}

fn ensure_readable(path: &Path) -> Result<()> {
    fs::read_dir(path).with_context(|| {
        format!("Cannot read working directory '{}'; check permissions", path.display())
    })?;
    Ok(())
}
