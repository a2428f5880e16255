//! Filesystem primitives used by the transform engine.
//!
//! The engine talks to the disk only through [`FileSystem`], so tests can
//! force a rename or copy to fail (e.g. to exercise the cross-device path on
//! a single filesystem).

use std::fs;
use std::io;
use std::path::Path;

use super::atomic::rename_durable;
use super::copy::safe_copy_and_rename;

pub trait FileSystem {
    /// Create a single directory; the parent must already exist.
    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        rename_durable(from, to)
    }

    /// Copy bytes and metadata; must not modify `from`.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        safe_copy_and_rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn create_dir(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).copy(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }
}
