//! Typed error definitions for edmv.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdmvError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line count changed: listing had {original} lines, edited listing has {edited}")]
    Alignment { original: usize, edited: usize },

    #[error("nothing to do: the edited listing matches the original")]
    NoOp,

    #[error("destination exists: {0}")]
    Conflict(PathBuf),

    #[error("cannot create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cross-device copy {from} -> {to} failed: {source}")]
    CopyFallback {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid path in listing: {0:?}")]
    InvalidPath(String),

    #[error("editor '{editor}' exited unsuccessfully ({status})")]
    Editor { editor: String, status: ExitStatus },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl EdmvError {
    /// Stable numeric code, used as a structured log field.
    pub fn code(&self) -> u16 {
        match self {
            EdmvError::Io(_) => 1,
            EdmvError::Alignment { .. } => 10,
            EdmvError::NoOp => 11,
            EdmvError::Conflict(_) => 20,
            EdmvError::DirectoryCreate { .. } => 21,
            EdmvError::CopyFallback { .. } => 22,
            EdmvError::InvalidPath(_) => 23,
            EdmvError::Editor { .. } => 30,
            EdmvError::Interrupted => 130,
        }
    }

    /// Short slug for the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            EdmvError::Io(_) => "io",
            EdmvError::Alignment { .. } => "alignment",
            EdmvError::NoOp => "no_op",
            EdmvError::Conflict(_) => "conflict",
            EdmvError::DirectoryCreate { .. } => "directory_create",
            EdmvError::CopyFallback { .. } => "copy_fallback",
            EdmvError::InvalidPath(_) => "invalid_path",
            EdmvError::Editor { .. } => "editor",
            EdmvError::Interrupted => "interrupted",
        }
    }

    /// Errors that end the run before anything touched the filesystem.
    pub fn is_clean_exit(&self) -> bool {
        matches!(self, EdmvError::Alignment { .. } | EdmvError::NoOp)
    }
}

pub type Result<T, E = EdmvError> = std::result::Result<T, E>;
