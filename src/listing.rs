//! Ordered path listings.
//!
//! A `PathList` is the flat, line-per-path form that is handed to the editor
//! and read back. Order is significant: line `i` of the original listing and
//! line `i` of the edited listing describe the same file.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

/// Insertion-ordered list of root-relative, `/`-separated file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    paths: Vec<String>,
}

impl PathList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a newline-delimited listing.
    ///
    /// A final newline does not produce a trailing empty entry. Interior empty
    /// lines are kept as literal empty paths; they are rejected later, when
    /// they take part in a rename.
    pub fn from_lines(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        let body = text.strip_suffix('\n').unwrap_or(text);
        Self {
            paths: body.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Read a whole stream and parse it with [`PathList::from_lines`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .context("read path listing")?;
        Ok(Self::from_lines(&text))
    }

    /// Enumerate every non-directory entry below `root`, in walk order.
    ///
    /// Paths are relative to `root` and always use `/` as separator. Symlinks
    /// are listed as entries and never followed.
    pub fn from_directory_walk(root: &Path) -> Result<Self> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
            let entry = entry.with_context(|| format!("walk {}", root.display()))?;
            if entry.file_type().is_dir() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(root)
                .with_context(|| format!("relativize {}", entry.path().display()))?;
            paths.push(to_slash(rel)?);
        }
        debug!(root = %root.display(), count = paths.len(), "enumerated listing");
        Ok(Self { paths })
    }

    /// Serialize one path per line, each newline-terminated.
    pub fn to_lines(&self) -> String {
        let mut out = String::with_capacity(self.paths.iter().map(|p| p.len() + 1).sum());
        for p in &self.paths {
            out.push_str(p);
            out.push('\n');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.paths.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    /// Remove and return the entry at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> String {
        self.paths.remove(index)
    }

    /// Lexicographic sort; the walk order itself is never sorted implicitly.
    pub fn sort(&mut self) {
        self.paths.sort();
    }
}

impl<S: Into<String>> FromIterator<S> for PathList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Join components with `/`. Names that are not valid UTF-8 cannot be written
/// to the listing and read back unchanged, so they are refused.
fn to_slash(rel: &Path) -> Result<String> {
    let parts = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .with_context(|| format!("file name is not valid UTF-8: {}", rel.display()))?;
    Ok(parts.join("/"))
}
