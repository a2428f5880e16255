//! Filesystem operations: the transform engine and its primitives.

mod atomic;
mod backend;
mod copy;
mod helpers;
mod metadata;
mod transform;
mod util;

pub use backend::{FileSystem, StdFileSystem};
pub use copy::safe_copy_and_rename;
pub use helpers::{io_error_with_help, io_error_with_help_io};
pub use transform::{ApplyReport, Transform};
