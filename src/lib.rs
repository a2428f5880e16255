//! Core library for `edmv`.
//!
//! The flow is: list files ([`PathList`]), let the user edit the listing,
//! align the two listings line by line ([`align::prune`]) and apply the
//! remaining renames ([`Transform`]). [`PathTree`] renders a preview of the
//! edited listing and [`Prompt`] asks for confirmation in between.

pub mod align;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod editor;
pub mod errors;
pub mod fs_ops;
pub mod listing;
pub mod output;
pub mod platform;
pub mod shutdown;
pub mod tree;

pub use align::{prune, RenamePlan};
pub use config::{default_config_path, path_has_symlink_ancestor, Config, LogLevel, PreviewStyle};
pub use confirm::{Choice, Prompt};
pub use errors::EdmvError;
pub use fs_ops::{ApplyReport, FileSystem, StdFileSystem, Transform};
pub use listing::PathList;
pub use tree::{PathTree, PathTreeNode};
