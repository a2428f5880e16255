//! CLI definition and parsing.
//!
//! Notes:
//! - SOURCE `-` reads the listing from stdin; paths are then relative to the
//!   current directory.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel, PreviewStyle};

/// Sentinel SOURCE value meaning "read the listing from stdin".
pub const STDIN_SOURCE: &str = "-";

/// Rename and move files by editing their listing.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rename and restructure a directory tree in your text editor"
)]
pub struct Args {
    /// Directory to list, or `-` to read the listing from stdin.
    #[arg(value_name = "SOURCE", default_value = ".", value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// Editor command (default: config, then $VISUAL, then $EDITOR).
    #[arg(long, value_name = "CMD")]
    pub editor: Option<String>,

    /// Apply without asking for confirmation.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Show the planned moves, but do not modify files/directories.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Sort the listing before editing (default keeps directory walk order).
    #[arg(long)]
    pub sort: bool,

    /// How to preview the edited listing.
    #[arg(long, value_enum, value_name = "STYLE")]
    pub preview: Option<PreviewStyle>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Also write logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Print where edmv looks for its config file, then exit.
    #[arg(long)]
    pub print_config: bool,

    /// Write a template config file at the config location, then exit.
    #[arg(long, conflicts_with = "print_config")]
    pub init_config: bool,
}

impl Args {
    /// True when SOURCE is the stdin sentinel.
    pub fn reads_stdin(&self) -> bool {
        self.source.as_os_str() == STDIN_SOURCE
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(editor) = &self.editor {
            cfg.editor = Some(editor.clone());
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
        if let Some(preview) = self.preview {
            cfg.preview = preview;
        }
        if self.sort {
            cfg.sort = true;
        }
        if self.yes {
            cfg.assume_yes = true;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
