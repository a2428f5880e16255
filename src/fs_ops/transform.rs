//! Transform engine: applies a [`RenamePlan`] to a working directory.
//!
//! Pairs are applied strictly front to back. For each pair the directories
//! implied by the target are created, then the file is renamed, falling back
//! to copy + remove when the rename crosses devices. The first failure stops
//! the run; moves already applied stay applied.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::align::RenamePlan;
use crate::errors::{EdmvError, Result};

use super::backend::{FileSystem, StdFileSystem};
use super::helpers::io_error_with_help_io;
use super::util::{is_cross_device, same_file};

/// What a completed run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Files relocated, by rename or by copy.
    pub moved: usize,
    /// Of those, how many needed the cross-device copy.
    pub copied: usize,
    pub dirs_created: usize,
}

#[derive(Debug, Clone)]
pub struct Transform<F = StdFileSystem> {
    root: PathBuf,
    fs: F,
}

impl Transform<StdFileSystem> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(root, StdFileSystem)
    }
}

impl<F: FileSystem> Transform<F> {
    pub fn with_fs(root: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            root: root.into(),
            fs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Apply every pair of `plan`, stopping at the first error.
    pub fn apply(&self, plan: &RenamePlan) -> Result<ApplyReport> {
        let mut report = ApplyReport::default();
        for (from, to) in plan.pairs() {
            components(from)?;
            let target = components(to)?;
            let (_, dirs) = target
                .split_last()
                .ok_or_else(|| EdmvError::InvalidPath(to.to_owned()))?;

            report.dirs_created += self.ensure_dirs(dirs)?;
            if self.relocate(from, to)? {
                report.copied += 1;
            }
            report.moved += 1;
        }
        Ok(report)
    }

    /// Create each accumulated prefix of `dirs` below the root. Returns how many were new.
    fn ensure_dirs(&self, dirs: &[&str]) -> Result<usize> {
        let mut rel = PathBuf::new();
        let mut created = 0;
        for dir in dirs {
            rel.push(dir);
            let abs = self.root.join(&rel);
            match self.fs.create_dir(&abs) {
                Ok(()) => {
                    debug!(path = %rel.display(), "created directory");
                    created += 1;
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    // Not followed: a linked component could point outside the root.
                    let file_type = fs::symlink_metadata(&abs)?.file_type();
                    if file_type.is_symlink() {
                        return Err(EdmvError::DirectoryCreate {
                            path: rel,
                            source: io::Error::new(
                                io::ErrorKind::AlreadyExists,
                                "is a symbolic link, not a directory",
                            ),
                        });
                    }
                    if !file_type.is_dir() {
                        return Err(EdmvError::DirectoryCreate {
                            path: rel,
                            source: io::Error::new(
                                io::ErrorKind::AlreadyExists,
                                "exists and is not a directory",
                            ),
                        });
                    }
                }
                Err(source) => return Err(EdmvError::DirectoryCreate { path: rel, source }),
            }
        }
        Ok(created)
    }

    /// Move one file. Returns true when the copy fallback was used.
    fn relocate(&self, from: &str, to: &str) -> Result<bool> {
        let src = self.root.join(from);
        let dst = self.root.join(to);

        if dst.symlink_metadata().is_ok() && !is_respelling(from, to, &src, &dst) {
            return Err(EdmvError::Conflict(PathBuf::from(to)));
        }

        match self.fs.rename(&src, &dst) {
            Ok(()) => {
                info!(from, to, "renamed");
                Ok(false)
            }
            Err(e) if is_cross_device(&e) => {
                warn!(from, to, error = %e, "rename crosses devices, copying instead");
                self.fs
                    .copy(&src, &dst)
                    .map_err(|source| EdmvError::CopyFallback {
                        from: PathBuf::from(from),
                        to: PathBuf::from(to),
                        source,
                    })?;
                self.fs
                    .remove_file(&src)
                    .map_err(io_error_with_help_io("remove original after copy", &src))?;
                info!(from, to, "copied and removed original");
                Ok(true)
            }
            Err(e) => Err(io_error_with_help_io("rename", &src)(e).into()),
        }
    }
}

/// Case-only rename of one entry on a case-insensitive filesystem. Two
/// distinct names for one inode (hard links) do not qualify.
fn is_respelling(from: &str, to: &str, src: &Path, dst: &Path) -> bool {
    from.eq_ignore_ascii_case(to) && same_file(src, dst).unwrap_or(false)
}

/// Split a listing path into components, refusing anything that could escape the root.
fn components(path: &str) -> Result<Vec<&str>> {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.iter().any(|p| matches!(*p, "" | "." | "..")) {
        return Err(EdmvError::InvalidPath(path.to_owned()));
    }
    Ok(parts)
}
